pub mod config_store;
pub mod control_channel;
pub mod lease_reader;
pub mod log_reader;
pub mod reservation_repository;

pub use config_store::ConfigStore;
pub use control_channel::ControlChannel;
pub use lease_reader::LeaseReader;
pub use log_reader::LogReader;
pub use reservation_repository::ReservationRepository;
