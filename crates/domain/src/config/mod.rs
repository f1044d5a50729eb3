//! Bridge settings, organized by section:
//! - `root`: top-level `Config` with file loading and env overrides
//! - `kea`: paths to the server's socket, config, leases and logs
//! - `database`: reservation store
//! - `logging`: bridge log level
//! - `errors`: settings errors

pub mod database;
pub mod errors;
pub mod kea;
pub mod logging;
pub mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use kea::KeaSettings;
pub use logging::LoggingConfig;
pub use root::Config;
