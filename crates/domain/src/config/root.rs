use serde::{Deserialize, Serialize};

use super::{ConfigError, DatabaseConfig, KeaSettings, LoggingConfig};

/// Top-level bridge settings.
///
/// Loaded from an optional TOML file, then overridden by environment
/// variables so deployments can relocate the server artifacts without a
/// settings file: `KEA_CONTROL_SOCKET`, `KEA_CONFIG_PATH`, `KEA_LEASE_FILE`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub kea: KeaSettings,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                        path: path.to_string(),
                        source,
                    })?;
                toml::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: path.to_string(),
                    source,
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(socket) = std::env::var("KEA_CONTROL_SOCKET") {
            self.kea.control_socket = socket;
        }
        if let Ok(path) = std::env::var("KEA_CONFIG_PATH") {
            self.kea.config_path = path;
        }
        if let Ok(lease_file) = std::env::var("KEA_LEASE_FILE") {
            self.kea.lease_file = lease_file;
        }
    }
}
