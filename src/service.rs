//! Fair value service
//!
//! Wires fetch, extraction and valuation into the three caller-facing
//! operations. Failures come back as values, never panics, so the serving
//! layer can forward them as `{"error": ...}` bodies.

use crate::extract::{ExtractionError, FieldExtractor, StructureError, TableLocator};
use crate::fetch::{DocumentFetcher, FetchError};
use crate::model::{CostOfCarryModel, FairValueModel, MarketInputs, ValuationResult};
use crate::signal::ArbitrageDetector;
use crate::telemetry::{self, CounterMetric, LatencyMetric};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

/// Any failure on the scrape path
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl PipelineError {
    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Structure(_) => "structure",
            Self::Extraction(_) => "extraction",
        }
    }
}

/// Valuation of scraped inputs, reported with the cash level it used
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrapedValuation {
    pub spx_price: f64,
    #[serde(flatten)]
    pub valuation: ValuationResult,
}

/// Wire shape of every operation: the payload or `{"error": message}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(T),
    Failure { error: String },
}

impl<T> From<Result<T, PipelineError>> for ApiResponse<T> {
    fn from(result: Result<T, PipelineError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(e) => Self::Failure {
                error: e.to_string(),
            },
        }
    }
}

/// The scrape and valuation pipeline
pub struct FairValueService<F: DocumentFetcher, M: FairValueModel = CostOfCarryModel> {
    fetcher: F,
    locator: TableLocator,
    detector: ArbitrageDetector<M>,
}

impl<F: DocumentFetcher> FairValueService<F> {
    /// Create a service using the cost-of-carry model
    pub fn new(fetcher: F) -> Self {
        Self::with_model(fetcher, CostOfCarryModel::new())
    }
}

impl<F: DocumentFetcher, M: FairValueModel> FairValueService<F, M> {
    /// Create a service with a custom fair value model
    pub fn with_model(fetcher: F, model: M) -> Self {
        Self {
            fetcher,
            locator: TableLocator::new(),
            detector: ArbitrageDetector::new(model),
        }
    }

    /// Fetch the page and extract its five figures
    pub async fn fetch_raw_inputs(&self) -> Result<MarketInputs, PipelineError> {
        let result = self.scrape().await;
        if let Err(e) = &result {
            tracing::warn!(kind = e.kind(), error = %e, "Scrape failed");
            telemetry::increment(CounterMetric::PipelineError, e.kind());
        }
        result
    }

    /// Scrape, then value the futures against the scraped ES price
    pub async fn compute_from_scrape(&self) -> Result<ScrapedValuation, PipelineError> {
        let inputs = self.fetch_raw_inputs().await?;
        let valuation = self.detector.evaluate(&inputs, inputs.es_price);

        tracing::info!(
            spx_price = inputs.spx_price,
            es_price = inputs.es_price,
            fair_es_price = valuation.fair_es_price,
            advice = valuation.arbitrage_advice.label(),
            "Computed fair value from scraped data"
        );

        Ok(ScrapedValuation {
            spx_price: inputs.spx_price,
            valuation,
        })
    }

    /// Value caller-supplied inputs; never touches the network
    pub fn compute_from_manual_input(
        &self,
        inputs: &MarketInputs,
        current_es_price: f64,
    ) -> ValuationResult {
        self.detector.evaluate(inputs, current_es_price)
    }

    async fn scrape(&self) -> Result<MarketInputs, PipelineError> {
        let body = self.fetcher.fetch().await?;

        let started = Instant::now();
        let table = self.locator.locate(&body)?;
        let inputs = FieldExtractor::extract(&table)?;
        telemetry::record_latency(LatencyMetric::Extraction, started.elapsed());

        Ok(inputs)
    }
}
