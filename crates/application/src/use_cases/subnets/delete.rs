use kea_bridge_domain::{BridgeError, KeaConfig};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ControlChannel;

/// Remove a subnet from the live configuration by id.
///
/// A failed fetch aborts before any mutation is attempted; nothing
/// destructive happens on stale data. Subject to the same
/// fetch-modify-push race as [`super::AddSubnetUseCase`].
pub struct DeleteSubnetUseCase {
    channel: Arc<dyn ControlChannel>,
}

impl DeleteSubnetUseCase {
    pub fn new(channel: Arc<dyn ControlChannel>) -> Self {
        Self { channel }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, subnet_id: u32) -> Result<(), BridgeError> {
        let mut config = KeaConfig::from_value(self.channel.send("config-get", None).await?);

        if !config.remove_subnet(subnet_id)? {
            return Err(BridgeError::NotFound(format!("subnet {subnet_id}")));
        }

        self.channel
            .send("config-set", Some(config.into_value()))
            .await?;

        info!(subnet_id, "Subnet deleted");
        Ok(())
    }
}
