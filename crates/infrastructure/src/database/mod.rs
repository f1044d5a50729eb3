use kea_bridge_domain::BridgeError;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

/// Open (creating if needed) the bridge database and ensure the schema.
pub async fn create_pool(database_path: &str) -> Result<SqlitePool, BridgeError> {
    let url = format!("sqlite://{database_path}?mode=rwc");
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .map_err(|e| BridgeError::Database(format!("failed to open {database_path}: {e}")))?;

    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), BridgeError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dhcp4_reservations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ip_address TEXT NOT NULL UNIQUE,
            hw_address TEXT NOT NULL UNIQUE,
            hostname TEXT,
            subnet_id INTEGER NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| BridgeError::Database(format!("failed to create schema: {e}")))?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_dhcp4_reservations_subnet
         ON dhcp4_reservations (subnet_id)",
    )
    .execute(pool)
    .await
    .map_err(|e| BridgeError::Database(format!("failed to create index: {e}")))?;

    info!("Reservation schema ready");
    Ok(())
}
