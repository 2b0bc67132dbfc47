//! cafe-console - Internet cafe station rental tracker
//!
//! Wires together:
//! - Configuration loading (optional TOML file plus command-line overrides)
//! - The station/customer registry
//! - The interactive menu on stdin/stdout

use anyhow::{Context, Result};
use cafe_config::{load_config, CafeSettings};
use cafe_console::Console;
use cafe_core::Registry;
use cafe_util::{
    default_config_path, format_datetime_full, is_mock_time_active, Clock, SystemClock,
};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// cafe-console - Track station rentals and revenue for an internet cafe
#[derive(Parser, Debug)]
#[command(name = "cafe-console")]
#[command(about = "Track station rentals and revenue for an internet cafe", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/cafe/config.toml, used only if present)
    #[arg(short, long, env = "CAFE_CONFIG")]
    config: Option<PathBuf>,

    /// Number of stations, overriding the config file
    #[arg(short, long)]
    stations: Option<u32>,

    /// Hourly rate, overriding the config file
    #[arg(short, long)]
    rate: Option<f64>,

    /// Log level (logs go to stderr)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn load_settings(args: &Args) -> Result<CafeSettings> {
    let mut settings = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                load_config(&path)
                    .with_context(|| format!("Failed to load config from {:?}", path))?
            } else {
                info!(config_path = %path.display(), "No config file, using defaults");
                CafeSettings::default()
            }
        }
    };

    if let Some(stations) = args.stations {
        settings.station_count = stations;
    }
    if let Some(rate) = args.rate {
        settings.rate_per_hour = rate;
    }

    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "cafe-console starting");

    if is_mock_time_active() {
        warn!(now = %format_datetime_full(&SystemClock.now()), "Using mock time for sessions");
    }

    let settings = load_settings(&args)?;
    let registry = Registry::from_settings(&settings).context("Invalid cafe settings")?;

    info!(
        station_count = settings.station_count,
        rate_per_hour = settings.rate_per_hour,
        "Settings loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        registry,
        settings.name,
        stdin.lock(),
        stdout.lock(),
        SystemClock,
    );
    console.run().context("Console I/O failed")?;

    info!(
        total_revenue = console.registry().total_revenue(),
        customers = console.registry().customer_count(),
        "cafe-console exiting"
    );

    Ok(())
}
