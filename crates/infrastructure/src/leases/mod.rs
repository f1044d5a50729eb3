use async_trait::async_trait;
use kea_bridge_application::ports::LeaseReader;
use kea_bridge_domain::{BridgeError, Lease};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, instrument, warn};

/// Reader for the memfile lease state: newline-delimited JSON, one lease
/// per line. Corrupt trailing lines are expected during lease churn and
/// are skipped, never fatal.
pub struct FileLeaseReader {
    lease_path: PathBuf,
}

impl FileLeaseReader {
    pub fn new(lease_path: impl Into<PathBuf>) -> Self {
        Self {
            lease_path: lease_path.into(),
        }
    }
}

#[async_trait]
impl LeaseReader for FileLeaseReader {
    #[instrument(skip(self))]
    async fn active_leases(&self) -> Result<Vec<Lease>, BridgeError> {
        let content = match fs::read_to_string(&self.lease_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.lease_path.display(), "Lease file not found");
                return Ok(Vec::new());
            }
            Err(e) => return Err(BridgeError::Io(format!("failed to read lease file: {e}"))),
        };

        let mut leases = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match serde_json::from_str::<Lease>(line) {
                Ok(lease) if lease.is_active() => leases.push(lease),
                Ok(_) => {}
                Err(e) => debug!(error = %e, "Skipping unparsable lease line"),
            }
        }

        debug!(count = leases.len(), "Active leases parsed");
        Ok(leases)
    }
}
