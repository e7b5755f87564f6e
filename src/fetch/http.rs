//! HTTP fetcher for the upstream page

use super::{DocumentFetcher, FetchError};
use crate::config::SourceConfig;
use crate::telemetry::{self, LatencyMetric};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Instant;

/// Fetches the page with a single GET using a browser-like User-Agent
pub struct HttpFetcher {
    url: String,
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher from source configuration
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }

    /// URL this fetcher requests
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        tracing::debug!(url = %self.url, "Fetching fair value page");
        let started = Instant::now();

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(url = %self.url, status = status.as_u16(), "Upstream rejected request");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        telemetry::record_latency(LatencyMetric::DocumentFetch, started.elapsed());

        tracing::debug!(url = %self.url, bytes = body.len(), "Fetched fair value page");
        Ok(body)
    }
}
