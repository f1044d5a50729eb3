//! # Kea Bridge
//!
//! Administrative bridge between a reservation database and a running
//! Kea DHCP4 server: queries and mutates the live configuration over the
//! control socket, and keeps the persisted configuration file in sync
//! with the reservation store, with backup-guarded writes.

mod bootstrap;
mod di;

use clap::{Parser, Subcommand};
use kea_bridge_domain::subnet::{OptionData, Pool, SubnetCandidate};
use kea_bridge_domain::NewReservation;

#[derive(Parser)]
#[command(name = "kea-bridge")]
#[command(version)]
#[command(about = "Administrative bridge for a Kea DHCP4 server")]
struct Cli {
    /// Path to the bridge settings file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query the running server's status
    Status,
    /// Manage subnets in the live configuration
    #[command(subcommand)]
    Subnet(SubnetCommand),
    /// Manage reservations in the bridge database
    #[command(subcommand)]
    Reservation(ReservationCommand),
    /// Show active leases
    Lease,
    /// Show recent log entries
    Log {
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// Persisted configuration operations
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Configuration backups
    #[command(subcommand)]
    Backup(BackupCommand),
}

#[derive(Subcommand)]
enum SubnetCommand {
    /// List live subnets
    List,
    /// Add a subnet to the live configuration
    Add {
        /// Subnet in CIDR notation, e.g. 192.168.50.0/24
        #[arg(long)]
        cidr: String,
        /// Address pool, e.g. "192.168.50.10 - 192.168.50.200" (repeatable)
        #[arg(long)]
        pool: Vec<String>,
        /// DHCP option as name=value, e.g. routers=192.168.50.1 (repeatable)
        #[arg(long)]
        option: Vec<String>,
    },
    /// Delete a subnet from the live configuration
    Delete { id: u32 },
}

#[derive(Subcommand)]
enum ReservationCommand {
    /// List reservations, optionally for one subnet
    List {
        #[arg(long)]
        subnet_id: Option<u32>,
    },
    /// Add a reservation
    Add {
        #[arg(long)]
        ip: String,
        #[arg(long)]
        mac: String,
        #[arg(long)]
        hostname: Option<String>,
        #[arg(long)]
        subnet_id: u32,
    },
    /// Delete a reservation
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write database reservations into the persisted configuration
    Sync,
    /// Ask the running server to re-read the persisted configuration
    Reload,
    /// Show persisted configuration statistics
    Stats,
}

#[derive(Subcommand)]
enum BackupCommand {
    /// List configuration backups, newest first
    List,
    /// Restore a named backup over the live configuration file
    Restore { filename: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref())?;
    bootstrap::init_logging(&config);
    let pool = bootstrap::init_database(&config.database).await?;
    let container = di::Container::build(&config, pool);
    let use_cases = &container.use_cases;

    match cli.command {
        Command::Status => {
            let status = use_cases.status.execute().await;
            print_json(&status)?;
        }
        Command::Subnet(SubnetCommand::List) => {
            let subnets = use_cases.list_subnets.execute().await;
            print_json(&subnets)?;
        }
        Command::Subnet(SubnetCommand::Add { cidr, pool, option }) => {
            let candidate = SubnetCandidate {
                cidr,
                pools: pool.into_iter().map(|range| Pool { range }).collect(),
                option_data: parse_options(&option)?,
            };
            let id = use_cases.add_subnet.execute(candidate).await?;
            println!("Subnet added with id {id}");
        }
        Command::Subnet(SubnetCommand::Delete { id }) => {
            use_cases.delete_subnet.execute(id).await?;
            println!("Subnet {id} deleted");
        }
        Command::Reservation(ReservationCommand::List { subnet_id }) => {
            let reservations = match subnet_id {
                Some(subnet_id) => container.reservations.list_by_subnet(subnet_id).await?,
                None => container.reservations.list().await?,
            };
            print_json(&reservations)?;
        }
        Command::Reservation(ReservationCommand::Add {
            ip,
            mac,
            hostname,
            subnet_id,
        }) => {
            let created = container
                .reservations
                .add(NewReservation {
                    ip_address: ip,
                    hw_address: mac,
                    hostname,
                    subnet_id,
                })
                .await?;
            println!("Reservation added with id {}", created.id);
        }
        Command::Reservation(ReservationCommand::Delete { id }) => {
            container.reservations.delete(id).await?;
            println!("Reservation {id} deleted");
        }
        Command::Lease => {
            let leases = use_cases.active_leases.execute().await;
            print_json(&leases)?;
        }
        Command::Log { limit } => {
            let entries = use_cases.recent_logs.execute(limit).await;
            for entry in entries {
                println!(
                    "{} {:5} {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.level.to_string(),
                    entry.message
                );
            }
        }
        Command::Config(ConfigCommand::Sync) => {
            let count = use_cases.sync_reservations.execute().await?;
            println!("Configuration updated with {count} reservations");
        }
        Command::Config(ConfigCommand::Reload) => {
            use_cases.reload.execute().await?;
            println!("Configuration reloaded");
        }
        Command::Config(ConfigCommand::Stats) => {
            let stats = use_cases.config_stats.execute().await;
            print_json(&stats)?;
        }
        Command::Backup(BackupCommand::List) => {
            let backups = use_cases.list_backups.execute().await;
            print_json(&backups)?;
        }
        Command::Backup(BackupCommand::Restore { filename }) => {
            use_cases.restore_backup.execute(&filename).await?;
            println!("Configuration restored from {filename}");
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_options(raw: &[String]) -> anyhow::Result<Vec<OptionData>> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| OptionData {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .ok_or_else(|| anyhow::anyhow!("option must be name=value, got '{pair}'"))
        })
        .collect()
}
