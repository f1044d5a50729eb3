pub mod reload;
pub mod status;

pub use reload::ReloadConfigUseCase;
pub use status::GetServerStatusUseCase;
