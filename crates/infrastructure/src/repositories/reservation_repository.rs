use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use kea_bridge_application::ports::ReservationRepository;
use kea_bridge_domain::validators::{is_valid_ipv4, is_valid_mac, normalize_mac};
use kea_bridge_domain::{BridgeError, NewReservation, Reservation};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type ReservationRow = (i64, String, String, Option<String>, i64, String, String);

const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_reservation(row: ReservationRow) -> Reservation {
        let (id, ip_address, hw_address, hostname, subnet_id, created_at, updated_at) = row;
        Reservation {
            id,
            ip_address,
            hw_address,
            hostname,
            subnet_id: subnet_id as u32,
            created_at: parse_timestamp(&created_at),
            updated_at: parse_timestamp(&updated_at),
        }
    }

    fn validated(reservation: NewReservation) -> Result<NewReservation, BridgeError> {
        if !is_valid_ipv4(&reservation.ip_address) {
            return Err(BridgeError::Validation(format!(
                "invalid IP address: {}",
                reservation.ip_address
            )));
        }
        if !is_valid_mac(&reservation.hw_address) {
            return Err(BridgeError::Validation(format!(
                "invalid MAC address: {}",
                reservation.hw_address
            )));
        }
        Ok(NewReservation {
            hw_address: normalize_mac(&reservation.hw_address),
            ..reservation
        })
    }

    /// IP and MAC must be unique across all reservations; `exclude_id`
    /// skips the row being updated.
    async fn check_conflicts(
        &self,
        reservation: &NewReservation,
        exclude_id: Option<i64>,
    ) -> Result<(), BridgeError> {
        let exclude = exclude_id.unwrap_or(-1);

        let ip_conflict: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM dhcp4_reservations WHERE ip_address = ? AND id != ?",
        )
        .bind(&reservation.ip_address)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| BridgeError::Database(e.to_string()))?;
        if ip_conflict.0 > 0 {
            return Err(BridgeError::Conflict(format!(
                "IP address {} is already reserved",
                reservation.ip_address
            )));
        }

        let mac_conflict: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM dhcp4_reservations WHERE hw_address = ? AND id != ?",
        )
        .bind(&reservation.hw_address)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| BridgeError::Database(e.to_string()))?;
        if mac_conflict.0 > 0 {
            return Err(BridgeError::Conflict(format!(
                "MAC address {} already has a reservation",
                reservation.hw_address
            )));
        }

        Ok(())
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FMT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Reservation>, BridgeError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            "SELECT id, ip_address, hw_address, hostname, subnet_id, created_at, updated_at
             FROM dhcp4_reservations
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list reservations");
            BridgeError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_reservation).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_subnet(&self, subnet_id: u32) -> Result<Vec<Reservation>, BridgeError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            "SELECT id, ip_address, hw_address, hostname, subnet_id, created_at, updated_at
             FROM dhcp4_reservations
             WHERE subnet_id = ?
             ORDER BY ip_address",
        )
        .bind(subnet_id as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list reservations by subnet");
            BridgeError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_reservation).collect())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i64) -> Result<Option<Reservation>, BridgeError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            "SELECT id, ip_address, hw_address, hostname, subnet_id, created_at, updated_at
             FROM dhcp4_reservations
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query reservation");
            BridgeError::Database(e.to_string())
        })?;

        Ok(row.map(Self::row_to_reservation))
    }

    #[instrument(skip(self, reservation), fields(ip = %reservation.ip_address))]
    async fn add(&self, reservation: NewReservation) -> Result<Reservation, BridgeError> {
        let reservation = Self::validated(reservation)?;
        self.check_conflicts(&reservation, None).await?;

        let now = Utc::now().format(TIMESTAMP_FMT).to_string();
        let result = sqlx::query(
            "INSERT INTO dhcp4_reservations
                 (ip_address, hw_address, hostname, subnet_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&reservation.ip_address)
        .bind(&reservation.hw_address)
        .bind(&reservation.hostname)
        .bind(reservation.subnet_id as i64)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert reservation");
            BridgeError::Database(e.to_string())
        })?;

        let id = result.last_insert_rowid();
        self.get(id).await?.ok_or_else(|| {
            BridgeError::Database("failed to fetch created reservation".to_string())
        })
    }

    #[instrument(skip(self, reservation))]
    async fn update(&self, id: i64, reservation: NewReservation) -> Result<(), BridgeError> {
        if self.get(id).await?.is_none() {
            return Err(BridgeError::NotFound(format!("reservation {id}")));
        }

        let reservation = Self::validated(reservation)?;
        self.check_conflicts(&reservation, Some(id)).await?;

        let now = Utc::now().format(TIMESTAMP_FMT).to_string();
        sqlx::query(
            "UPDATE dhcp4_reservations
             SET ip_address = ?, hw_address = ?, hostname = ?, subnet_id = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&reservation.ip_address)
        .bind(&reservation.hw_address)
        .bind(&reservation.hostname)
        .bind(reservation.subnet_id as i64)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update reservation");
            BridgeError::Database(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), BridgeError> {
        let result = sqlx::query("DELETE FROM dhcp4_reservations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete reservation");
                BridgeError::Database(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(BridgeError::NotFound(format!("reservation {id}")));
        }
        Ok(())
    }
}
