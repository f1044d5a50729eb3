pub mod get_active;

pub use get_active::GetActiveLeasesUseCase;
