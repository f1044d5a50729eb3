use async_trait::async_trait;
use kea_bridge_domain::{BridgeError, NewReservation, Reservation};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All reservations, ordered by id.
    async fn list(&self) -> Result<Vec<Reservation>, BridgeError>;

    /// Reservations for one subnet, ordered by IP.
    async fn list_by_subnet(&self, subnet_id: u32) -> Result<Vec<Reservation>, BridgeError>;

    async fn get(&self, id: i64) -> Result<Option<Reservation>, BridgeError>;

    /// Insert after validating formats and checking IP/MAC uniqueness.
    async fn add(&self, reservation: NewReservation) -> Result<Reservation, BridgeError>;

    /// Update after the same conflict checks, excluding the row itself.
    async fn update(&self, id: i64, reservation: NewReservation) -> Result<(), BridgeError>;

    async fn delete(&self, id: i64) -> Result<(), BridgeError>;
}
