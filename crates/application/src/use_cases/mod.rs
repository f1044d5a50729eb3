pub mod config;
pub mod leases;
pub mod logs;
pub mod server;
pub mod subnets;
