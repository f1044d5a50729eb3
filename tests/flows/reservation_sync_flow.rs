/// Reservation Sync Flow Test
///
/// Tests the full database-to-file cycle:
/// Add rows → Sync → Persisted config updated → Delete row → Re-sync → Cleared

use kea_bridge_application::ports::{ConfigStore, ReservationRepository};
use kea_bridge_application::use_cases::config::SyncReservationsUseCase;
use kea_bridge_domain::{KeaConfig, NewReservation};
use kea_bridge_infrastructure::config_store::FileConfigStore;
use kea_bridge_infrastructure::database::init_schema;
use kea_bridge_infrastructure::repositories::SqliteReservationRepository;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;
use std::sync::Arc;

async fn seed_store(dir: &Path) -> Arc<FileConfigStore> {
    let store = FileConfigStore::new(dir.join("kea-dhcp4.conf"), 10);
    let document = KeaConfig::from_value(json!({
        "Dhcp4": {
            "valid-lifetime": 4000,
            "interfaces-config": { "interfaces": ["*"] },
            "subnet4": [
                { "id": 1, "subnet": "10.0.1.0/24", "pools": [{ "pool": "10.0.1.10 - 10.0.1.200" }] },
                { "id": 2, "subnet": "10.0.2.0/24", "pools": [] }
            ]
        }
    }));
    store.save(&document).await.expect("seed config");
    Arc::new(store)
}

async fn empty_repo() -> Arc<SqliteReservationRepository> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    init_schema(&pool).await.expect("create schema");
    Arc::new(SqliteReservationRepository::new(pool))
}

fn reservation(ip: &str, mac: &str, hostname: Option<&str>, subnet_id: u32) -> NewReservation {
    NewReservation {
        ip_address: ip.to_string(),
        hw_address: mac.to_string(),
        hostname: hostname.map(str::to_string),
        subnet_id,
    }
}

#[tokio::test]
async fn test_database_rows_reach_the_persisted_config() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_store(dir.path()).await;
    let repo = empty_repo().await;

    repo.add(reservation("10.0.1.5", "AA:BB:CC:DD:EE:FF", Some("printer"), 1))
        .await
        .unwrap();
    repo.add(reservation("10.0.1.6", "11-22-33-44-55-66", None, 1))
        .await
        .unwrap();

    let count = SyncReservationsUseCase::new(store.clone(), repo)
        .execute()
        .await
        .unwrap();
    assert_eq!(count, 2);

    // Assert on the file itself, not on in-process state.
    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("kea-dhcp4.conf")).unwrap())
            .unwrap();
    let first = on_disk["Dhcp4"]["subnet4"][0]["reservations"]
        .as_array()
        .unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0]["hw-address"], "aa:bb:cc:dd:ee:ff");
    assert_eq!(first[0]["hostname"], "printer");
    assert_eq!(first[1]["hw-address"], "11:22:33:44:55:66");
    assert!(first[1].get("hostname").is_none());

    let second = on_disk["Dhcp4"]["subnet4"][1]["reservations"]
        .as_array()
        .unwrap();
    assert!(second.is_empty());

    // The pre-sync file was backed up before being replaced.
    assert_eq!(store.list_backups().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deletion_propagates_on_resync() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_store(dir.path()).await;
    let repo = empty_repo().await;

    let created = repo
        .add(reservation("10.0.1.5", "aa:bb:cc:dd:ee:ff", None, 1))
        .await
        .unwrap();
    let use_case = SyncReservationsUseCase::new(store.clone(), repo.clone());
    assert_eq!(use_case.execute().await.unwrap(), 1);

    repo.delete(created.id).await.unwrap();
    assert_eq!(use_case.execute().await.unwrap(), 0);

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("kea-dhcp4.conf")).unwrap())
            .unwrap();
    assert!(on_disk["Dhcp4"]["subnet4"][0]["reservations"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_server_owned_keys_survive_the_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileConfigStore::new(dir.path().join("kea-dhcp4.conf"), 10);
    let document = KeaConfig::from_value(json!({
        "Dhcp4": {
            "valid-lifetime": 4000,
            "interfaces-config": { "interfaces": ["eth0"] },
            "expired-leases-processing": { "reclaim-timer-wait-time": 10 },
            "subnet4": [
                { "id": 1, "subnet": "10.0.1.0/24", "relay": { "ip-addresses": ["10.0.1.1"] } }
            ]
        }
    }));
    store.save(&document).await.unwrap();
    let store = Arc::new(store);

    let repo = empty_repo().await;
    repo.add(reservation("10.0.1.5", "aa:bb:cc:dd:ee:ff", None, 1))
        .await
        .unwrap();

    SyncReservationsUseCase::new(store, repo)
        .execute()
        .await
        .unwrap();

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("kea-dhcp4.conf")).unwrap())
            .unwrap();
    assert_eq!(
        on_disk["Dhcp4"]["expired-leases-processing"]["reclaim-timer-wait-time"],
        10
    );
    assert_eq!(
        on_disk["Dhcp4"]["subnet4"][0]["relay"]["ip-addresses"][0],
        "10.0.1.1"
    );
    assert_eq!(
        on_disk["Dhcp4"]["subnet4"][0]["reservations"][0]["ip-address"],
        "10.0.1.5"
    );
}
