//! Command implementations for the SPBU CLI.
//!
//! Each subcommand loads the station directory from the configured seed
//! and prints one of its views as a table or as JSON.

use clap::{Args, Subcommand, ValueEnum};
use spbu_station::StationStatus;
use spbu_store::{StationStore, StatusFilter};
use std::path::PathBuf;

pub mod output;
pub mod query;
pub mod tasks;

/// Default alert threshold, in hours since the last report.
pub const DEFAULT_THRESHOLD_HOURS: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct Options {
    /// Station seed CSV (defaults to the built-in station list)
    #[arg(long, global = true, env = "SPBU_SEED")]
    pub seed: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Table, env = "SPBU_FORMAT")]
    pub format: Format,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every station in seed order
    List,

    /// Search stations by name/region text, status and region
    Filter {
        /// Case-insensitive text matched against name and region
        #[arg(short, long, default_value = "")]
        query: String,

        /// connected, offline, priority, onroute or all
        #[arg(short, long, default_value = "all", value_parser = parse_status_filter)]
        status: StatusFilter,

        /// Exact region, or all
        #[arg(short, long, default_value = "all")]
        region: String,
    },

    /// Station counts by status
    Kpi,

    /// Offline and priority alerts
    Alerts {
        /// Hours since last report before an offline station raises an alert
        #[arg(short = 't', long, default_value_t = DEFAULT_THRESHOLD_HOURS, env = "SPBU_ALERT_THRESHOLD_HOURS")]
        threshold_hours: f64,
    },

    /// Detail view of one station
    Show {
        id: String,
    },

    /// Technician board: offline stations and their task progress
    Tasks,

    /// Mark a technician task as in progress and print the board
    Accept {
        id: String,
    },

    /// Mark a technician task as done and print the board
    Complete {
        id: String,
    },

    /// Distinct regions in seed order
    Regions,

    /// Display color token per status
    Colors {
        /// Only this status
        #[arg(value_parser = parse_status)]
        status: Option<StationStatus>,
    },
}

fn parse_status(s: &str) -> Result<StationStatus, String> {
    s.parse().map_err(|e: spbu_station::StationError| e.to_string())
}

fn parse_status_filter(s: &str) -> Result<StatusFilter, String> {
    s.parse().map_err(|e: spbu_station::StationError| e.to_string())
}

/// Build the store from the configured seed file, or the built-in list.
pub fn load_store(options: &Options) -> anyhow::Result<StationStore> {
    let store = StationStore::new();
    let count = match &options.seed {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("seed file {} not found", path.display());
            }
            let csv_data = std::fs::read_to_string(path)?;
            store
                .load_stations(&csv_data)
                .map_err(|e| anyhow::anyhow!("Failed to load seed {}: {}", path.display(), e))?
        }
        None => store.load_stations(spbu_station::station::CSV_OBJECT)?,
    };
    log::info!("Loaded {} stations", count);
    Ok(store)
}

pub fn run(options: Options, command: Command) -> anyhow::Result<()> {
    let store = load_store(&options)?;
    let format = options.format;
    let rendered = match command {
        Command::List => query::run_list(&store, format)?,
        Command::Filter {
            query,
            status,
            region,
        } => query::run_filter(&store, format, &query, status, &region)?,
        Command::Kpi => query::run_kpi(&store, format)?,
        Command::Alerts { threshold_hours } => {
            query::run_alerts(&store, format, threshold_hours)?
        }
        Command::Show { id } => query::run_show(&store, format, &id)?,
        Command::Tasks => tasks::run_tasks(&store, format)?,
        Command::Accept { id } => tasks::run_accept(&store, format, &id)?,
        Command::Complete { id } => tasks::run_complete(&store, format, &id)?,
        Command::Regions => query::run_regions(&store, format)?,
        Command::Colors { status } => query::run_colors(format, status)?,
    };
    println!("{}", rendered);
    Ok(())
}
