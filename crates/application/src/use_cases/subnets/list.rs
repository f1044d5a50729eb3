use kea_bridge_domain::{KeaConfig, Subnet};
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::ports::ControlChannel;

/// List the subnets held in the running server's configuration.
/// Read-only; degrades to an empty list on any channel failure.
pub struct ListSubnetsUseCase {
    channel: Arc<dyn ControlChannel>,
}

impl ListSubnetsUseCase {
    pub fn new(channel: Arc<dyn ControlChannel>) -> Self {
        Self { channel }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Vec<Subnet> {
        match self.channel.send("config-get", None).await {
            Ok(config) => KeaConfig::from_value(config).subnets(),
            Err(e) => {
                warn!(error = %e, "Failed to list live subnets");
                Vec::new()
            }
        }
    }
}
