//! Kea Bridge Infrastructure Layer
//!
//! Adapters for the application ports: the control-channel transports, the
//! persisted-configuration store with backups, the lease and log file
//! readers and the SQLite reservation repository.
pub mod channel;
pub mod config_store;
pub mod database;
pub mod leases;
pub mod logs;
pub mod repositories;
