use kea_bridge_domain::config::DatabaseConfig;
use kea_bridge_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let pool = create_pool(&cfg.path).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(path = %cfg.path, "Database initialized");
    Ok(pool)
}
