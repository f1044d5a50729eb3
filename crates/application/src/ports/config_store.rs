use async_trait::async_trait;
use kea_bridge_domain::{BackupInfo, BridgeError, ConfigStats, KeaConfig};

/// Manager of the persisted configuration file and its backup directory.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read and parse the file; a missing file yields a structurally valid
    /// default document, a malformed file is `ConfigCorrupt`.
    async fn load(&self) -> Result<KeaConfig, BridgeError>;

    /// Backup, then validate, then write. A backup is taken even when the
    /// document later fails validation; a known-invalid document never
    /// reaches the destination path.
    async fn save(&self, config: &KeaConfig) -> Result<(), BridgeError>;

    /// Copy the current file into the backup directory under a timestamped
    /// name and apply retention. `None` when there is no file to back up.
    async fn backup(&self) -> Result<Option<BackupInfo>, BridgeError>;

    /// Existing backups, newest first.
    async fn list_backups(&self) -> Result<Vec<BackupInfo>, BridgeError>;

    /// Copy the named backup over the live path, backing up the current
    /// file first so the restore itself is undoable.
    async fn restore(&self, filename: &str) -> Result<(), BridgeError>;

    /// Counts plus file size and mtime.
    async fn stats(&self) -> Result<ConfigStats, BridgeError>;
}
