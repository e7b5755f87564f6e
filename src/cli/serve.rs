//! Serve command implementation

use crate::config::Config;
use crate::fetch::fetcher_for;
use crate::server;
use crate::service::FairValueService;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the configured bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Serve from a saved copy of the page instead of the live site
    #[arg(long)]
    pub from_file: Option<PathBuf>,
}

impl ServeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut server_config = config.server.clone();
        if let Some(host) = &self.host {
            server_config.host = host.clone();
        }
        if let Some(port) = self.port {
            server_config.port = port;
        }

        match &self.from_file {
            Some(path) => tracing::info!(path = %path.display(), "Serving from saved page"),
            None => tracing::info!(url = %config.source.url, "Serving from live page"),
        }

        let fetcher = fetcher_for(&config.source, self.from_file.as_deref())?;
        let service = Arc::new(FairValueService::new(fetcher));
        server::serve(&server_config, service).await
    }
}
