use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Control channel unavailable: {0}")]
    ChannelUnavailable(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Command rejected: {0}")]
    CommandRejected(String),

    #[error("Configuration file corrupt: {0}")]
    ConfigCorrupt(String),

    #[error("Invalid configuration structure")]
    InvalidStructure,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(String),
}
