use async_trait::async_trait;
use kea_bridge_application::ports::ControlChannel;
use kea_bridge_domain::BridgeError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::process::Command;
use tracing::{debug, instrument};

use super::protocol::{encode_command, parse_response};
use super::transport::Transport;

/// Control channel against a local Kea server.
///
/// The socket must exist before any transport is attempted; a hung peer is
/// cut off by the configured timeout and surfaces as a transport error.
pub struct UnixControlChannel {
    socket_path: PathBuf,
    transport: Transport,
    timeout: Duration,
}

impl UnixControlChannel {
    pub fn new(socket_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            socket_path: socket_path.into(),
            transport: Transport::detect(),
            timeout,
        }
    }

    /// Pin the transport instead of probing `PATH` (useful for tests).
    pub fn with_transport(
        socket_path: impl Into<PathBuf>,
        transport: Transport,
        timeout: Duration,
    ) -> Self {
        Self {
            socket_path: socket_path.into(),
            transport,
            timeout,
        }
    }

    async fn send_via_socket(&self, payload: &[u8]) -> Result<Vec<u8>, BridgeError> {
        let mut stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| BridgeError::Transport(format!("socket connect failed: {e}")))?;

        stream
            .write_all(payload)
            .await
            .map_err(|e| BridgeError::Transport(format!("socket write failed: {e}")))?;
        // Half-close the write side; the peer answers and closes.
        stream
            .shutdown()
            .await
            .map_err(|e| BridgeError::Transport(format!("socket shutdown failed: {e}")))?;

        let mut response = Vec::new();
        stream
            .read_to_end(&mut response)
            .await
            .map_err(|e| BridgeError::Transport(format!("socket read failed: {e}")))?;
        Ok(response)
    }

    async fn send_via_shell(&self, client: &Path, payload: &[u8]) -> Result<Vec<u8>, BridgeError> {
        let mut child = Command::new(client)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BridgeError::Transport(format!("failed to spawn shell client: {e}")))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| BridgeError::Transport("shell client stdin unavailable".to_string()))?;
        stdin
            .write_all(payload)
            .await
            .map_err(|e| BridgeError::Transport(format!("shell client write failed: {e}")))?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| BridgeError::Transport(format!("shell client wait failed: {e}")))?;

        if !output.status.success() {
            return Err(BridgeError::Transport(format!(
                "shell client exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(output.stdout)
    }
}

#[async_trait]
impl ControlChannel for UnixControlChannel {
    #[instrument(skip(self, arguments))]
    async fn send(&self, command: &str, arguments: Option<Value>) -> Result<Value, BridgeError> {
        if !self.socket_path.exists() {
            return Err(BridgeError::ChannelUnavailable(
                self.socket_path.display().to_string(),
            ));
        }

        let payload = encode_command(command, arguments.as_ref())?;
        debug!(bytes = payload.len(), transport = ?self.transport, "Sending control command");

        let round_trip = async {
            match &self.transport {
                Transport::Shell(client) => self.send_via_shell(client, &payload).await,
                Transport::Socket => self.send_via_socket(&payload).await,
            }
        };

        let raw = tokio::time::timeout(self.timeout, round_trip)
            .await
            .map_err(|_| {
                BridgeError::Transport(format!(
                    "control command timed out after {:?}",
                    self.timeout
                ))
            })??;

        parse_response(&raw)
    }
}
