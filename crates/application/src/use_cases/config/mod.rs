pub mod backups;
pub mod stats;
pub mod sync_reservations;

pub use backups::{ListBackupsUseCase, RestoreBackupUseCase};
pub use stats::GetConfigStatsUseCase;
pub use sync_reservations::SyncReservationsUseCase;
