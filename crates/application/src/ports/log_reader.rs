use async_trait::async_trait;
use kea_bridge_domain::{BridgeError, LogEntry};

#[async_trait]
pub trait LogReader: Send + Sync {
    /// Up to `limit` entries merged across the watched files, newest first.
    async fn recent_entries(&self, limit: usize) -> Result<Vec<LogEntry>, BridgeError>;
}
