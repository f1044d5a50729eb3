use serde::{Deserialize, Serialize};

/// Locations of the Kea server artifacts the bridge touches.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeaSettings {
    /// Control socket of the running server (default: "/tmp/kea4-ctrl-socket")
    #[serde(default = "default_control_socket")]
    pub control_socket: String,

    /// Persisted configuration file (default: "/etc/kea/kea-dhcp4.conf")
    #[serde(default = "default_config_path")]
    pub config_path: String,

    /// Memfile lease state (default: "/var/lib/kea/dhcp4.leases")
    #[serde(default = "default_lease_file")]
    pub lease_file: String,

    /// Log files merged by the log reader, server's own log first.
    #[serde(default = "default_log_files")]
    pub log_files: Vec<String>,

    /// Bound on a single control-channel round-trip, in seconds.
    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,

    /// How many timestamped backups of the config file to retain.
    #[serde(default = "default_backup_retention")]
    pub backup_retention: usize,
}

impl Default for KeaSettings {
    fn default() -> Self {
        Self {
            control_socket: default_control_socket(),
            config_path: default_config_path(),
            lease_file: default_lease_file(),
            log_files: default_log_files(),
            command_timeout_secs: default_command_timeout(),
            backup_retention: default_backup_retention(),
        }
    }
}

fn default_control_socket() -> String {
    "/tmp/kea4-ctrl-socket".to_string()
}

fn default_config_path() -> String {
    "/etc/kea/kea-dhcp4.conf".to_string()
}

fn default_lease_file() -> String {
    "/var/lib/kea/dhcp4.leases".to_string()
}

fn default_log_files() -> Vec<String> {
    vec![
        "/var/log/kea/kea-dhcp4.log".to_string(),
        "logs/kea-bridge.log".to_string(),
    ]
}

fn default_command_timeout() -> u64 {
    5
}

fn default_backup_retention() -> usize {
    10
}
