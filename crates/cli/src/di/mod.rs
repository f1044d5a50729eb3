//! Explicit wiring of ports into use cases. One context object instead of
//! process-wide singletons, so every operation receives its collaborators.

use kea_bridge_application::ports::{
    ConfigStore, ControlChannel, LeaseReader, LogReader, ReservationRepository,
};
use kea_bridge_application::use_cases::config::{
    GetConfigStatsUseCase, ListBackupsUseCase, RestoreBackupUseCase, SyncReservationsUseCase,
};
use kea_bridge_application::use_cases::leases::GetActiveLeasesUseCase;
use kea_bridge_application::use_cases::logs::GetRecentLogsUseCase;
use kea_bridge_application::use_cases::server::{GetServerStatusUseCase, ReloadConfigUseCase};
use kea_bridge_application::use_cases::subnets::{
    AddSubnetUseCase, DeleteSubnetUseCase, ListSubnetsUseCase,
};
use kea_bridge_domain::Config;
use kea_bridge_infrastructure::channel::UnixControlChannel;
use kea_bridge_infrastructure::config_store::FileConfigStore;
use kea_bridge_infrastructure::leases::FileLeaseReader;
use kea_bridge_infrastructure::logs::FileLogReader;
use kea_bridge_infrastructure::repositories::SqliteReservationRepository;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub status: GetServerStatusUseCase,
    pub reload: ReloadConfigUseCase,
    pub list_subnets: ListSubnetsUseCase,
    pub add_subnet: AddSubnetUseCase,
    pub delete_subnet: DeleteSubnetUseCase,
    pub active_leases: GetActiveLeasesUseCase,
    pub recent_logs: GetRecentLogsUseCase,
    pub sync_reservations: SyncReservationsUseCase,
    pub list_backups: ListBackupsUseCase,
    pub restore_backup: RestoreBackupUseCase,
    pub config_stats: GetConfigStatsUseCase,
}

pub struct Container {
    pub use_cases: UseCases,
    pub reservations: Arc<dyn ReservationRepository>,
}

impl Container {
    pub fn build(config: &Config, pool: SqlitePool) -> Self {
        let channel: Arc<dyn ControlChannel> = Arc::new(UnixControlChannel::new(
            &config.kea.control_socket,
            Duration::from_secs(config.kea.command_timeout_secs),
        ));
        let store: Arc<dyn ConfigStore> = Arc::new(FileConfigStore::new(
            &config.kea.config_path,
            config.kea.backup_retention,
        ));
        let lease_reader: Arc<dyn LeaseReader> =
            Arc::new(FileLeaseReader::new(&config.kea.lease_file));
        let log_reader: Arc<dyn LogReader> = Arc::new(FileLogReader::new(
            config.kea.log_files.iter().map(PathBuf::from).collect(),
        ));
        let reservations: Arc<dyn ReservationRepository> =
            Arc::new(SqliteReservationRepository::new(pool));

        let use_cases = UseCases {
            status: GetServerStatusUseCase::new(channel.clone()),
            reload: ReloadConfigUseCase::new(channel.clone()),
            list_subnets: ListSubnetsUseCase::new(channel.clone()),
            add_subnet: AddSubnetUseCase::new(channel.clone()),
            delete_subnet: DeleteSubnetUseCase::new(channel),
            active_leases: GetActiveLeasesUseCase::new(lease_reader),
            recent_logs: GetRecentLogsUseCase::new(log_reader),
            sync_reservations: SyncReservationsUseCase::new(store.clone(), reservations.clone()),
            list_backups: ListBackupsUseCase::new(store.clone()),
            restore_backup: RestoreBackupUseCase::new(store.clone()),
            config_stats: GetConfigStatsUseCase::new(store),
        };

        Self {
            use_cases,
            reservations,
        }
    }
}
