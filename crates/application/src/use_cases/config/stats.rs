use kea_bridge_domain::ConfigStats;
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::ports::ConfigStore;

/// Summary counts for the persisted configuration.
/// Read-only; degrades to defaults on failure.
pub struct GetConfigStatsUseCase {
    store: Arc<dyn ConfigStore>,
}

impl GetConfigStatsUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> ConfigStats {
        match self.store.stats().await {
            Ok(stats) => stats,
            Err(e) => {
                warn!(error = %e, "Failed to compute config stats");
                ConfigStats::default()
            }
        }
    }
}
