use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use kea_bridge_application::ports::ConfigStore;
use kea_bridge_domain::{BackupInfo, BridgeError, ConfigStats, KeaConfig};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

const BACKUP_DIR: &str = "backups";
const BACKUP_PREFIX: &str = "kea-dhcp4";

/// Persisted configuration manager.
///
/// Owns the on-disk `kea-dhcp4.conf` and a `backups/` directory next to it.
/// Every write is preceded by a timestamped backup of the previous file, so
/// there is always a recovery point even when the write itself is rejected.
pub struct FileConfigStore {
    config_path: PathBuf,
    backup_dir: PathBuf,
    retention: usize,
}

impl FileConfigStore {
    pub fn new(config_path: impl Into<PathBuf>, retention: usize) -> Self {
        let config_path = config_path.into();
        let backup_dir = config_path
            .parent()
            .map(|dir| dir.join(BACKUP_DIR))
            .unwrap_or_else(|| PathBuf::from(BACKUP_DIR));
        Self {
            config_path,
            backup_dir,
            retention,
        }
    }

    fn backup_filename() -> String {
        format!(
            "{BACKUP_PREFIX}_{}.conf",
            Local::now().format("%Y%m%d_%H%M%S")
        )
    }

    async fn backup_entry(&self, path: PathBuf) -> Option<BackupInfo> {
        let filename = path.file_name()?.to_str()?.to_string();
        if !filename.starts_with(BACKUP_PREFIX) || !filename.ends_with(".conf") {
            return None;
        }

        let metadata = fs::metadata(&path).await.ok()?;
        let created_at: DateTime<Utc> = metadata.modified().ok()?.into();
        Some(BackupInfo {
            filename,
            path,
            created_at,
            size: metadata.len(),
        })
    }

    /// Delete everything beyond the newest `retention` backups.
    async fn cleanup_old_backups(&self) -> Result<(), BridgeError> {
        let backups = self.list_backups().await?;
        for stale in backups.iter().skip(self.retention) {
            match fs::remove_file(&stale.path).await {
                Ok(()) => info!(filename = %stale.filename, "Deleted old backup"),
                Err(e) => warn!(filename = %stale.filename, error = %e, "Failed to delete old backup"),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<KeaConfig, BridgeError> {
        let content = match fs::read_to_string(&self.config_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.config_path.display(), "Configuration file not found, using defaults");
                return Ok(KeaConfig::default_document());
            }
            Err(e) => return Err(BridgeError::Io(format!("failed to read config: {e}"))),
        };

        let value = serde_json::from_str(&content)
            .map_err(|e| BridgeError::ConfigCorrupt(e.to_string()))?;
        Ok(KeaConfig::from_value(value))
    }

    #[instrument(skip(self, config))]
    async fn save(&self, config: &KeaConfig) -> Result<(), BridgeError> {
        // Backup first, unconditionally: the previous good state must be
        // recoverable even when this save is rejected below.
        self.backup().await?;

        if !config.validate() {
            return Err(BridgeError::InvalidStructure);
        }

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| BridgeError::Io(format!("failed to create config dir: {e}")))?;
        }

        let pretty = serde_json::to_string_pretty(config.as_value())
            .map_err(|e| BridgeError::Io(format!("failed to serialize config: {e}")))?;
        fs::write(&self.config_path, pretty)
            .await
            .map_err(|e| BridgeError::Io(format!("failed to write config: {e}")))?;

        info!(path = %self.config_path.display(), "Configuration saved");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn backup(&self) -> Result<Option<BackupInfo>, BridgeError> {
        if !self.config_path.exists() {
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir)
            .await
            .map_err(|e| BridgeError::Io(format!("failed to create backup dir: {e}")))?;

        let backup_path = self.backup_dir.join(Self::backup_filename());
        fs::copy(&self.config_path, &backup_path)
            .await
            .map_err(|e| BridgeError::Io(format!("failed to copy backup: {e}")))?;

        self.cleanup_old_backups().await?;

        debug!(path = %backup_path.display(), "Configuration backed up");
        Ok(self.backup_entry(backup_path).await)
    }

    #[instrument(skip(self))]
    async fn list_backups(&self) -> Result<Vec<BackupInfo>, BridgeError> {
        let mut entries = match fs::read_dir(&self.backup_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BridgeError::Io(format!("failed to read backup dir: {e}"))),
        };

        let mut backups = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| BridgeError::Io(format!("failed to enumerate backups: {e}")))?
        {
            if let Some(info) = self.backup_entry(entry.path()).await {
                backups.push(info);
            }
        }

        // Newest first; the embedded timestamp breaks mtime ties.
        backups.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.filename.cmp(&a.filename))
        });
        Ok(backups)
    }

    #[instrument(skip(self))]
    async fn restore(&self, filename: &str) -> Result<(), BridgeError> {
        let backup_path = self.backup_dir.join(filename);
        if !backup_path.exists() {
            return Err(BridgeError::NotFound(format!("backup {filename}")));
        }

        // The pre-restore state must itself be recoverable.
        self.backup().await?;

        fs::copy(&backup_path, &self.config_path)
            .await
            .map_err(|e| BridgeError::Io(format!("failed to restore backup: {e}")))?;

        info!(filename, "Configuration restored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> Result<ConfigStats, BridgeError> {
        let config = self.load().await?;
        let (total_subnets, total_reservations, total_pools) = config.counts();

        let (config_file_size, last_modified) = match fs::metadata(&self.config_path).await {
            Ok(metadata) => (
                metadata.len(),
                metadata.modified().ok().map(DateTime::<Utc>::from),
            ),
            Err(_) => (0, None),
        };

        Ok(ConfigStats {
            total_subnets,
            total_reservations,
            total_pools,
            config_file_size,
            last_modified,
        })
    }
}
