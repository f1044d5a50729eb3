use kea_bridge_domain::{BridgeError, ServerStatus};
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::ports::ControlChannel;

/// Query the running server's health over the control channel.
///
/// A dashboard-style read: never fails. A clean rejection (or a missing
/// control socket) means the server is down; a transport or protocol
/// failure means the channel itself is broken and the state is unknown.
pub struct GetServerStatusUseCase {
    channel: Arc<dyn ControlChannel>,
}

impl GetServerStatusUseCase {
    pub fn new(channel: Arc<dyn ControlChannel>) -> Self {
        Self { channel }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> ServerStatus {
        match self.channel.send("status-get", None).await {
            Ok(arguments) => ServerStatus::running(
                arguments.get("pid").and_then(|v| v.as_i64()),
                arguments.get("uptime").and_then(|v| v.as_i64()),
            ),
            Err(e @ (BridgeError::CommandRejected(_) | BridgeError::ChannelUnavailable(_))) => {
                ServerStatus::stopped(e.to_string())
            }
            Err(e) => {
                warn!(error = %e, "Status check failed");
                ServerStatus::unknown(e.to_string())
            }
        }
    }
}
