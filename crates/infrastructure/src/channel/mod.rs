pub mod protocol;
pub mod transport;
pub mod unix_channel;

pub use transport::Transport;
pub use unix_channel::UnixControlChannel;
