use kea_bridge_domain::LogEntry;
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::ports::LogReader;

/// Recent entries across the watched log files, newest first.
/// Read-only; degrades to empty on failure.
pub struct GetRecentLogsUseCase {
    reader: Arc<dyn LogReader>,
}

impl GetRecentLogsUseCase {
    pub fn new(reader: Arc<dyn LogReader>) -> Self {
        Self { reader }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, limit: usize) -> Vec<LogEntry> {
        match self.reader.recent_entries(limit).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Failed to read logs");
                Vec::new()
            }
        }
    }
}
