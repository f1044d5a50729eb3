use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerState {
    Running,
    Stopped,
    Unknown,
}

/// Result of a `status-get` round-trip against the DHCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub state: ServerState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServerStatus {
    pub fn running(pid: Option<i64>, uptime_seconds: Option<i64>) -> Self {
        Self {
            state: ServerState::Running,
            pid,
            uptime_seconds,
            error: None,
        }
    }

    pub fn stopped(error: impl Into<String>) -> Self {
        Self {
            state: ServerState::Stopped,
            pid: None,
            uptime_seconds: None,
            error: Some(error.into()),
        }
    }

    pub fn unknown(error: impl Into<String>) -> Self {
        Self {
            state: ServerState::Unknown,
            pid: None,
            uptime_seconds: None,
            error: Some(error.into()),
        }
    }
}
