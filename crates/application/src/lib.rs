//! Kea Bridge Application Layer
//!
//! Ports (traits implemented by the infrastructure crate) and the use cases
//! that drive the control channel, the persisted configuration and the
//! reservation store.
pub mod ports;
pub mod use_cases;
