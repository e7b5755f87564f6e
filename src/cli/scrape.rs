//! Fetch and calculate command implementation

use super::print_json;
use crate::config::Config;
use crate::fetch::fetcher_for;
use crate::service::{ApiResponse, FairValueService, PipelineError};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Read a saved copy of the page instead of fetching it
    #[arg(long)]
    pub from_file: Option<PathBuf>,
}

impl ScrapeArgs {
    /// Print the scraped inputs
    pub async fn fetch(&self, config: &Config) -> anyhow::Result<()> {
        let service = FairValueService::new(fetcher_for(&config.source, self.from_file.as_deref())?);
        report(service.fetch_raw_inputs().await)
    }

    /// Print the fair value computed from scraped inputs
    pub async fn calculate(&self, config: &Config) -> anyhow::Result<()> {
        let service = FairValueService::new(fetcher_for(&config.source, self.from_file.as_deref())?);
        report(service.compute_from_scrape().await)
    }
}

/// Print the response body; a scrape failure also fails the command
fn report<T: Serialize>(result: Result<T, PipelineError>) -> anyhow::Result<()> {
    let failed = result.is_err();
    let response = ApiResponse::from(result);
    print_json(&response)?;

    if failed {
        anyhow::bail!("scrape failed");
    }
    Ok(())
}
