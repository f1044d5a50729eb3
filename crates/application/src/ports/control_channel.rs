use async_trait::async_trait;
use kea_bridge_domain::BridgeError;
use serde_json::Value;

/// One blocking request/response round-trip against the server's control
/// socket. No retries at this layer; retry policy belongs to the caller.
#[async_trait]
pub trait ControlChannel: Send + Sync {
    /// Send `{command, arguments?}` and return the `arguments` payload of a
    /// successful response.
    ///
    /// Errors: `ChannelUnavailable` when the socket is absent, `Transport`
    /// for subprocess/socket failures, `Protocol` for unparsable responses
    /// and `CommandRejected` when the server answers with a non-zero result.
    async fn send(&self, command: &str, arguments: Option<Value>) -> Result<Value, BridgeError>;
}
