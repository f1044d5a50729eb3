use kea_bridge_domain::{BackupInfo, BridgeError};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::ConfigStore;

/// Backups of the persisted configuration, newest first.
/// Read-only; degrades to empty on failure.
pub struct ListBackupsUseCase {
    store: Arc<dyn ConfigStore>,
}

impl ListBackupsUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Vec<BackupInfo> {
        match self.store.list_backups().await {
            Ok(backups) => backups,
            Err(e) => {
                warn!(error = %e, "Failed to list backups");
                Vec::new()
            }
        }
    }
}

/// Copy a named backup over the live configuration file.
pub struct RestoreBackupUseCase {
    store: Arc<dyn ConfigStore>,
}

impl RestoreBackupUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, filename: &str) -> Result<(), BridgeError> {
        self.store.restore(filename).await?;
        info!(filename, "Configuration restored from backup");
        Ok(())
    }
}
