use async_trait::async_trait;
use kea_bridge_domain::{BridgeError, Lease};

#[async_trait]
pub trait LeaseReader: Send + Sync {
    /// Leases with a positive remaining valid lifetime.
    async fn active_leases(&self) -> Result<Vec<Lease>, BridgeError>;
}
