//! Command line geocoder
//!
//! Resolves addresses and coordinates through a configured chain of
//! backends:
//! - `geocode forward "Melbourne VIC"`
//! - `geocode reverse -37.816742 144.964463`

mod config;

use clap::{Parser, Subcommand};
use config::ChainConfig;
use geo_core::{Error, Geocoder, Location};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(name = "geocode")]
#[command(about = "Forward and reverse geocoding through a backend chain", long_about = None)]
struct Cli {
    /// Chain config file (defaults to the user config, then Nominatim)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an address to coordinates
    Forward {
        /// Free-text address or place name
        query: String,
    },

    /// Resolve coordinates to an address
    Reverse {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_env_filter()),
        )
        .init();

    let cli = Cli::parse();

    let (config, base_dir) = ChainConfig::resolve(cli.config.as_deref())?;
    let chain = config.build(&base_dir)?;
    debug!("Chain: {:?}", chain);

    match cli.command {
        Commands::Forward { query } => run_forward(&chain, &query, cli.json).await,
        Commands::Reverse { lat, lng } => run_reverse(&chain, lat, lng, cli.json).await,
    }
}

fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LOG_FILTER)
}

async fn run_forward(
    geocoder: &dyn Geocoder,
    query: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    match geocoder.geocode(query).await {
        Ok(location) => {
            if json {
                println!("{}", serde_json::to_string(&location)?);
            } else {
                println!("{}", location);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::NoResult) => {
            eprintln!("no result for {:?}", query);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

async fn run_reverse(
    geocoder: &dyn Geocoder,
    lat: f64,
    lng: f64,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let location = Location::try_new(lat, lng)?;

    match geocoder.reverse_geocode(location.lat, location.lng).await {
        Ok(address) => {
            if json {
                println!("{}", serde_json::json!({ "address": address }));
            } else {
                println!("{}", address);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::NoResult) => {
            eprintln!("no result for ({})", location);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
