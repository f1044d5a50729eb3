use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A host reservation row as stored in the bridge database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub ip_address: String,
    /// Canonical lowercase colon-separated MAC.
    pub hw_address: String,
    pub hostname: Option<String>,
    pub subnet_id: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating or updating a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub ip_address: String,
    pub hw_address: String,
    pub hostname: Option<String>,
    pub subnet_id: u32,
}

/// The Kea host-reservation schema. `hostname` is omitted when unset;
/// the server treats omission, not an empty string, as "no hostname".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeaReservation {
    #[serde(rename = "hw-address")]
    pub hw_address: String,
    #[serde(rename = "ip-address")]
    pub ip_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

/// Project database reservations into the Kea reservation schema.
/// Empty hostnames are dropped, not emitted as `""`.
pub fn project_reservations(reservations: &[Reservation]) -> Vec<KeaReservation> {
    reservations
        .iter()
        .map(|r| KeaReservation {
            hw_address: r.hw_address.clone(),
            ip_address: r.ip_address.clone(),
            hostname: r
                .hostname
                .as_ref()
                .filter(|h| !h.is_empty())
                .cloned(),
        })
        .collect()
}
