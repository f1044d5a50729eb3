use kea_bridge_domain::Lease;
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::ports::LeaseReader;

/// Current active leases. Read-only; degrades to empty on failure.
pub struct GetActiveLeasesUseCase {
    reader: Arc<dyn LeaseReader>,
}

impl GetActiveLeasesUseCase {
    pub fn new(reader: Arc<dyn LeaseReader>) -> Self {
        Self { reader }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Vec<Lease> {
        match self.reader.active_leases().await {
            Ok(leases) => leases,
            Err(e) => {
                warn!(error = %e, "Failed to read leases");
                Vec::new()
            }
        }
    }
}
