//! Parcel Tracker CLI - register and follow parcels stored in SQLite

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracker::config::{self, TrackerConfig};
use tracker::storage::ParcelStore;
use tracker::ui::{self, Icons};
use tracker::ParcelService;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "parcel-tracker")]
#[command(version)]
#[command(about = "Parcel Tracker - register parcels and follow them until delivery")]
#[command(long_about = r#"
Parcel Tracker keeps shipment records in a local SQLite database.

Example usage:
  parcel-tracker register --client 1000 --address "Lenina 5"
  parcel-tracker next-status 1
  parcel-tracker list --client 1000
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true, default_value = "tracker.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file pointing at the database
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Register a new parcel
    Register {
        /// Owning client id
        #[arg(long)]
        client: i64,

        /// Delivery address
        #[arg(long)]
        address: String,
    },

    /// Show a single parcel
    Show {
        /// Parcel number
        number: i64,
    },

    /// List all parcels of a client
    List {
        /// Client id
        #[arg(long)]
        client: i64,
    },

    /// Advance a parcel to its next status
    NextStatus {
        /// Parcel number
        number: i64,
    },

    /// Change the address of a registered parcel
    SetAddress {
        /// Parcel number
        number: i64,

        /// New delivery address
        address: String,
    },

    /// Delete a registered parcel
    Delete {
        /// Parcel number
        number: i64,
    },

    /// Show statistics about stored parcels
    Stats,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::Register { .. } => "register",
            Commands::Show { .. } => "show",
            Commands::List { .. } => "list",
            Commands::NextStatus { .. } => "next-status",
            Commands::SetAddress { .. } => "set-address",
            Commands::Delete { .. } => "delete",
            Commands::Stats => "stats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    fn is_human(self) -> bool {
        self == OutputMode::Human
    }
}

fn emit_success(command: &str, data: serde_json::Value) -> anyhow::Result<()> {
    let body = serde_json::json!({
        "ok": true,
        "command": command,
        "data": data,
    });
    println!("{}", serde_json::to_string(&body)?);
    Ok(())
}

fn emit_error(command: &str, err: &anyhow::Error) {
    let body = serde_json::json!({
        "ok": false,
        "command": command,
        "error": format!("{:#}", err),
    });
    println!("{}", body);
}

fn open_service(database: &Path) -> anyhow::Result<ParcelService> {
    config::ensure_db_dir(database)?;
    let store = ParcelStore::open(database)?;
    Ok(ParcelService::new(store))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let command = cli.command.name();

    if let Err(err) = run(cli, mode) {
        match mode {
            OutputMode::Json => emit_error(command, &err),
            OutputMode::Human => ui::error(&format!("{:#}", err)),
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli, mode: OutputMode) -> anyhow::Result<()> {
    let loaded = config::load_config(Some(&cli.config))?;
    let database = config::resolve_database(cli.database, loaded.as_ref());
    tracing::debug!("Using database {:?}", database);

    match cli.command {
        Commands::Init { force } => {
            let config = TrackerConfig {
                database: Some(database.to_string_lossy().to_string()),
            };
            config::write_config(&cli.config, &config, force)?;

            if mode.is_human() {
                ui::success(&format!("Wrote {}", cli.config.display()));
                ui::info("Database", &database.display().to_string());
            } else {
                emit_success("init", serde_json::json!({
                    "config": cli.config.display().to_string(),
                    "database": database.display().to_string(),
                }))?;
            }
        }

        Commands::Register { client, address } => {
            let service = open_service(&database)?;
            let parcel = service.register(client, &address)?;

            if mode.is_human() {
                ui::success(&format!("Registered parcel {}", parcel.number));
                ui::summary_row("Client:", &parcel.client.to_string());
                ui::summary_row("Address:", &parcel.address);
                ui::summary_row("Created:", &parcel.created_at);
            } else {
                emit_success("register", serde_json::to_value(&parcel)?)?;
            }
        }

        Commands::Show { number } => {
            let service = open_service(&database)?;
            let parcel = service.parcel(number)?;

            if mode.is_human() {
                ui::header(&format!("Parcel {}", parcel.number));
                ui::summary_row("Client:", &parcel.client.to_string());
                ui::summary_row("Status:", &ui::status_badge(parcel.status));
                ui::summary_row("Address:", &parcel.address);
                ui::summary_row("Created:", &parcel.created_at);
            } else {
                emit_success("show", serde_json::to_value(&parcel)?)?;
            }
        }

        Commands::List { client } => {
            let service = open_service(&database)?;
            let parcels = service.client_parcels(client)?;

            if mode.is_human() {
                if parcels.is_empty() {
                    println!("{} No parcels found for client {}.", Icons::EMPTY, client);
                } else {
                    ui::section(&format!("{} Client {} ({} parcels)", Icons::PERSON, client, parcels.len()));
                    println!("{}", ui::parcel_table(&parcels));
                }
            } else {
                emit_success("list", serde_json::to_value(&parcels)?)?;
            }
        }

        Commands::NextStatus { number } => {
            let service = open_service(&database)?;
            let status = service.next_status(number)?;

            if mode.is_human() {
                println!("{} Parcel {} is now {}", Icons::TRUCK, number, ui::status_badge(status));
            } else {
                emit_success("next-status", serde_json::json!({
                    "number": number,
                    "status": status,
                }))?;
            }
        }

        Commands::SetAddress { number, address } => {
            let service = open_service(&database)?;
            service.change_address(number, &address)?;

            if mode.is_human() {
                println!("{} Parcel {} will be delivered to {}", Icons::HOUSE, number, address);
            } else {
                emit_success("set-address", serde_json::json!({
                    "number": number,
                    "address": address,
                }))?;
            }
        }

        Commands::Delete { number } => {
            let service = open_service(&database)?;
            service.delete(number)?;

            if mode.is_human() {
                println!("{} Parcel {} deleted", Icons::DEL, number);
            } else {
                emit_success("delete", serde_json::json!({ "number": number }))?;
            }
        }

        Commands::Stats => {
            let service = open_service(&database)?;
            let stats = service.store().stats()?;

            if mode.is_human() {
                println!("{} Parcel Tracker Statistics ({} {:?})", Icons::STATS, Icons::DATABASE, database);
                println!("{}", ui::stats_table(&stats));
            } else {
                emit_success("stats", serde_json::to_value(&stats)?)?;
            }
        }
    }

    Ok(())
}
