//! Best-effort log line classifier.
//!
//! Free-text lines from the server and bridge logs are mapped to a
//! timestamp and a level. Unmatched lines fall back to INFO at the
//! supplied reference time instead of failing.

use chrono::{DateTime, NaiveDateTime, Utc};
use kea_bridge_domain::{LogEntry, LogLevel};
use once_cell::sync::Lazy;
use regex::Regex;

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4}-\d{2}-\d{2})[T ](\d{2}:\d{2}:\d{2})").expect("valid timestamp regex")
});

pub fn classify_line(line: &str, now: DateTime<Utc>) -> LogEntry {
    LogEntry {
        timestamp: extract_timestamp(line).unwrap_or(now),
        level: extract_level(line),
        message: line.trim().to_string(),
    }
}

fn extract_timestamp(line: &str) -> Option<DateTime<Utc>> {
    let captures = TIMESTAMP_RE.captures(line)?;
    let candidate = format!("{} {}", &captures[1], &captures[2]);
    NaiveDateTime::parse_from_str(&candidate, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

fn extract_level(line: &str) -> LogLevel {
    let upper = line.to_uppercase();
    if upper.contains("ERROR") {
        LogLevel::Error
    } else if upper.contains("WARN") {
        LogLevel::Warn
    } else if upper.contains("INFO") {
        LogLevel::Info
    } else if upper.contains("DEBUG") {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}
