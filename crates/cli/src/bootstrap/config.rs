use kea_bridge_domain::Config;
use tracing::info;

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<Config> {
    let config = Config::load(config_path)?;

    info!(
        config_file = config_path.unwrap_or("default"),
        control_socket = %config.kea.control_socket,
        kea_config = %config.kea.config_path,
        lease_file = %config.kea.lease_file,
        "Configuration loaded"
    );

    Ok(config)
}
