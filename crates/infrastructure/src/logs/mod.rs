pub mod classify;

use async_trait::async_trait;
use chrono::Utc;
use kea_bridge_application::ports::LogReader;
use kea_bridge_domain::{BridgeError, LogEntry};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, instrument};

pub use classify::classify_line;

/// Merges the tails of the candidate log files (the server's own log and
/// the bridge's operational log) into one newest-first stream. Files that
/// do not exist are skipped silently.
pub struct FileLogReader {
    log_paths: Vec<PathBuf>,
}

impl FileLogReader {
    pub fn new(log_paths: Vec<PathBuf>) -> Self {
        Self { log_paths }
    }
}

#[async_trait]
impl LogReader for FileLogReader {
    #[instrument(skip(self))]
    async fn recent_entries(&self, limit: usize) -> Result<Vec<LogEntry>, BridgeError> {
        let now = Utc::now();
        let mut entries = Vec::new();

        for path in &self.log_paths {
            let Ok(content) = fs::read_to_string(path).await else {
                continue;
            };

            let lines: Vec<&str> = content.lines().collect();
            let tail_start = lines.len().saturating_sub(limit);
            for line in &lines[tail_start..] {
                if line.trim().is_empty() {
                    continue;
                }
                entries.push(classify_line(line, now));
            }
        }

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(limit);

        debug!(count = entries.len(), "Log entries merged");
        Ok(entries)
    }
}
