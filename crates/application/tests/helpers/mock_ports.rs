#![allow(dead_code)]

use async_trait::async_trait;
use kea_bridge_application::ports::{ConfigStore, ControlChannel, ReservationRepository};
use kea_bridge_domain::{
    BackupInfo, BridgeError, ConfigStats, KeaConfig, NewReservation, Reservation,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

// ============================================================================
// Mock ControlChannel
// ============================================================================

/// Canned reply for one command. Errors are rebuilt per call so replies can
/// be installed once and used repeatedly.
#[derive(Clone)]
pub enum MockReply {
    Ok(Value),
    Rejected(String),
    Transport(String),
    Unavailable(String),
}

impl MockReply {
    fn to_result(&self) -> Result<Value, BridgeError> {
        match self {
            MockReply::Ok(value) => Ok(value.clone()),
            MockReply::Rejected(text) => Err(BridgeError::CommandRejected(text.clone())),
            MockReply::Transport(msg) => Err(BridgeError::Transport(msg.clone())),
            MockReply::Unavailable(path) => Err(BridgeError::ChannelUnavailable(path.clone())),
        }
    }
}

#[derive(Clone)]
pub struct MockControlChannel {
    replies: Arc<Mutex<HashMap<String, MockReply>>>,
    sent: Arc<Mutex<Vec<(String, Option<Value>)>>>,
}

impl MockControlChannel {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(HashMap::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn set_reply(&self, command: &str, reply: MockReply) {
        self.replies.lock().await.insert(command.to_string(), reply);
    }

    /// Every command sent so far, with its arguments.
    pub async fn sent(&self) -> Vec<(String, Option<Value>)> {
        self.sent.lock().await.clone()
    }

    /// Arguments of the last `config-set`, if any was pushed.
    pub async fn pushed_config(&self) -> Option<Value> {
        self.sent
            .lock()
            .await
            .iter()
            .rev()
            .find(|(command, _)| command == "config-set")
            .and_then(|(_, arguments)| arguments.clone())
    }
}

impl Default for MockControlChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ControlChannel for MockControlChannel {
    async fn send(&self, command: &str, arguments: Option<Value>) -> Result<Value, BridgeError> {
        self.sent
            .lock()
            .await
            .push((command.to_string(), arguments));

        let replies = self.replies.lock().await;
        replies
            .get(command)
            .map(MockReply::to_result)
            .unwrap_or_else(|| {
                Err(BridgeError::CommandRejected(format!(
                    "no mock reply for {command}"
                )))
            })
    }
}

// ============================================================================
// Mock ConfigStore
// ============================================================================

#[derive(Clone)]
pub struct MockConfigStore {
    document: Arc<Mutex<KeaConfig>>,
    saved: Arc<Mutex<Vec<KeaConfig>>>,
    load_fails: Arc<Mutex<bool>>,
}

impl MockConfigStore {
    pub fn new(document: KeaConfig) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
            saved: Arc::new(Mutex::new(Vec::new())),
            load_fails: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn set_load_fails(&self, fails: bool) {
        *self.load_fails.lock().await = fails;
    }

    pub async fn saved(&self) -> Vec<KeaConfig> {
        self.saved.lock().await.clone()
    }
}

#[async_trait]
impl ConfigStore for MockConfigStore {
    async fn load(&self) -> Result<KeaConfig, BridgeError> {
        if *self.load_fails.lock().await {
            return Err(BridgeError::ConfigCorrupt("mock load failure".to_string()));
        }
        Ok(self.document.lock().await.clone())
    }

    async fn save(&self, config: &KeaConfig) -> Result<(), BridgeError> {
        self.saved.lock().await.push(config.clone());
        *self.document.lock().await = config.clone();
        Ok(())
    }

    async fn backup(&self) -> Result<Option<BackupInfo>, BridgeError> {
        Ok(None)
    }

    async fn list_backups(&self) -> Result<Vec<BackupInfo>, BridgeError> {
        Ok(Vec::new())
    }

    async fn restore(&self, filename: &str) -> Result<(), BridgeError> {
        Err(BridgeError::NotFound(format!("backup {filename}")))
    }

    async fn stats(&self) -> Result<ConfigStats, BridgeError> {
        Ok(ConfigStats::default())
    }
}

// ============================================================================
// Mock ReservationRepository
// ============================================================================

#[derive(Clone)]
pub struct MockReservationRepository {
    rows: Arc<Mutex<Vec<Reservation>>>,
}

impl MockReservationRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_rows(rows: Vec<Reservation>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }
}

impl Default for MockReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience builder for test rows.
pub fn reservation(id: i64, ip: &str, mac: &str, subnet_id: u32) -> Reservation {
    Reservation {
        id,
        ip_address: ip.to_string(),
        hw_address: mac.to_string(),
        hostname: None,
        subnet_id,
        created_at: None,
        updated_at: None,
    }
}

#[async_trait]
impl ReservationRepository for MockReservationRepository {
    async fn list(&self) -> Result<Vec<Reservation>, BridgeError> {
        Ok(self.rows.lock().await.clone())
    }

    async fn list_by_subnet(&self, subnet_id: u32) -> Result<Vec<Reservation>, BridgeError> {
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .filter(|r| r.subnet_id == subnet_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Reservation>, BridgeError> {
        Ok(self.rows.lock().await.iter().find(|r| r.id == id).cloned())
    }

    async fn add(&self, new: NewReservation) -> Result<Reservation, BridgeError> {
        let mut rows = self.rows.lock().await;
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let row = Reservation {
            id,
            ip_address: new.ip_address,
            hw_address: new.hw_address,
            hostname: new.hostname,
            subnet_id: new.subnet_id,
            created_at: None,
            updated_at: None,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, new: NewReservation) -> Result<(), BridgeError> {
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| BridgeError::NotFound(format!("reservation {id}")))?;
        row.ip_address = new.ip_address;
        row.hw_address = new.hw_address;
        row.hostname = new.hostname;
        row.subnet_id = new.subnet_id;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), BridgeError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(BridgeError::NotFound(format!("reservation {id}")));
        }
        Ok(())
    }
}
