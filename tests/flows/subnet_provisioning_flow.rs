/// Subnet Provisioning Flow Test
///
/// Drives the live-configuration accessors against a scripted control
/// endpoint on a real unix socket:
/// Add → fetch-modify-push → List → Delete → cleared

use kea_bridge_application::use_cases::subnets::{
    AddSubnetUseCase, DeleteSubnetUseCase, ListSubnetsUseCase,
};
use kea_bridge_domain::subnet::{OptionData, Pool, SubnetCandidate};
use kea_bridge_infrastructure::channel::{Transport, UnixControlChannel};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixListener;

/// Minimal stateful control endpoint: holds one configuration document,
/// answers `config-get` with it and replaces it on `config-set`.
fn spawn_control_endpoint(socket_path: &Path, initial: Value) -> tokio::task::JoinHandle<()> {
    let listener = UnixListener::bind(socket_path).expect("bind control socket");
    tokio::spawn(async move {
        let mut document = initial;
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut request = Vec::new();
            if stream.read_to_end(&mut request).await.is_err() {
                return;
            }
            let envelope: Value = serde_json::from_slice(&request).expect("request is JSON");

            let reply = match envelope["command"].as_str() {
                Some("config-get") => json!([{ "result": 0, "arguments": document.clone() }]),
                Some("config-set") => {
                    document = envelope["arguments"].clone();
                    json!([{ "result": 0 }])
                }
                other => json!([{ "result": 2, "text": format!("unsupported command {other:?}") }]),
            };
            let _ = stream.write_all(reply.to_string().as_bytes()).await;
        }
    })
}

fn channel(socket_path: &Path) -> Arc<UnixControlChannel> {
    Arc::new(UnixControlChannel::with_transport(
        socket_path,
        Transport::Socket,
        Duration::from_secs(2),
    ))
}

fn initial_config() -> Value {
    json!({
        "Dhcp4": {
            "valid-lifetime": 4000,
            "interfaces-config": { "interfaces": ["*"] },
            "subnet4": [
                { "id": 1, "subnet": "10.0.1.0/24", "pools": [{ "pool": "10.0.1.10 - 10.0.1.200" }] }
            ]
        }
    })
}

#[tokio::test]
async fn test_add_list_delete_against_live_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let socket_path = dir.path().join("kea4-ctrl-socket");
    let endpoint = spawn_control_endpoint(&socket_path, initial_config());
    let channel = channel(&socket_path);

    // Add: the new subnet gets the next free id.
    let id = AddSubnetUseCase::new(channel.clone())
        .execute(SubnetCandidate {
            cidr: "192.168.50.0/24".to_string(),
            pools: vec![Pool {
                range: "192.168.50.10 - 192.168.50.100".to_string(),
            }],
            option_data: vec![OptionData {
                name: "routers".to_string(),
                value: "192.168.50.1".to_string(),
            }],
        })
        .await
        .unwrap();
    assert_eq!(id, 2);

    // List: both subnets visible on a fresh fetch.
    let subnets = ListSubnetsUseCase::new(channel.clone()).execute().await;
    assert_eq!(subnets.len(), 2);
    assert_eq!(subnets[1].cidr, "192.168.50.0/24");
    assert_eq!(subnets[1].option_data[0].name, "routers");

    // Delete the original subnet; only the new one remains.
    DeleteSubnetUseCase::new(channel.clone()).execute(1).await.unwrap();
    let subnets = ListSubnetsUseCase::new(channel).execute().await;
    assert_eq!(subnets.len(), 1);
    assert_eq!(subnets[0].id, 2);

    endpoint.abort();
}

#[tokio::test]
async fn test_delete_of_unknown_subnet_leaves_endpoint_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let socket_path = dir.path().join("kea4-ctrl-socket");
    let endpoint = spawn_control_endpoint(&socket_path, initial_config());
    let channel = channel(&socket_path);

    assert!(DeleteSubnetUseCase::new(channel.clone())
        .execute(99)
        .await
        .is_err());

    let subnets = ListSubnetsUseCase::new(channel).execute().await;
    assert_eq!(subnets.len(), 1);
    assert_eq!(subnets[0].id, 1);

    endpoint.abort();
}
