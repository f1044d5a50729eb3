use kea_bridge_domain::BridgeError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ControlChannel;

/// Ask the running server to re-read its persisted configuration. This is
/// how on-disk edits become live; the file itself is not touched here.
pub struct ReloadConfigUseCase {
    channel: Arc<dyn ControlChannel>,
}

impl ReloadConfigUseCase {
    pub fn new(channel: Arc<dyn ControlChannel>) -> Self {
        Self { channel }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<(), BridgeError> {
        self.channel.send("config-reload", None).await?;
        info!("Configuration reloaded");
        Ok(())
    }
}
