//! Kea Bridge Domain Layer
pub mod backup;
pub mod config;
pub mod errors;
pub mod kea_config;
pub mod lease;
pub mod log_entry;
pub mod reservation;
pub mod server_status;
pub mod subnet;
pub mod validators;

pub use backup::BackupInfo;
pub use config::{Config, ConfigError};
pub use errors::BridgeError;
pub use kea_config::{ConfigStats, KeaConfig};
pub use lease::Lease;
pub use log_entry::{LogEntry, LogLevel};
pub use reservation::{project_reservations, KeaReservation, NewReservation, Reservation};
pub use server_status::{ServerState, ServerStatus};
pub use subnet::{OptionData, Pool, Subnet, SubnetCandidate};
