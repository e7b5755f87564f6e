//! CLI interface for es-fair-value
//!
//! Provides subcommands for:
//! - `serve`: Start the HTTP service
//! - `fetch`: Print the scraped inputs
//! - `calculate`: Print the fair value computed from scraped inputs
//! - `manual`: Print the fair value for inputs given on the command line
//! - `config`: Show configuration

mod manual;
mod scrape;
mod serve;

pub use manual::ManualArgs;
pub use scrape::ScrapeArgs;
pub use serve::ServeArgs;

use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "es-fair-value")]
#[command(about = "SPX/ES futures fair value and index arbitrage signal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP service
    Serve(ServeArgs),
    /// Scrape and print the raw inputs
    Fetch(ScrapeArgs),
    /// Scrape and print the computed fair value
    Calculate(ScrapeArgs),
    /// Compute fair value from command-line inputs
    Manual(ManualArgs),
    /// Show configuration
    Config,
}

/// Print a result as JSON on stdout
fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
