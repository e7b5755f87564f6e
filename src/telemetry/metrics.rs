//! Prometheus metrics

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Upstream page download
    DocumentFetch,
    /// Table location and field extraction
    Extraction,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// A pipeline run ended in an error response
    PipelineError,
    /// A field fell back to its zero default
    FieldDefaulted,
    /// A valuation was produced
    Valuation,
}

/// Start the Prometheus HTTP exporter on the given port
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::DocumentFetch => "fairvalue_document_fetch_latency_ms",
        LatencyMetric::Extraction => "fairvalue_extraction_latency_ms",
    };

    metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1000.0);
}

/// Increment a counter, labelled with what happened
pub fn increment(metric: CounterMetric, label: &'static str) {
    match metric {
        CounterMetric::PipelineError => {
            metrics::counter!("fairvalue_pipeline_errors_total", "kind" => label).increment(1)
        }
        CounterMetric::FieldDefaulted => {
            metrics::counter!("fairvalue_field_defaults_total", "field" => label).increment(1)
        }
        CounterMetric::Valuation => {
            metrics::counter!("fairvalue_valuations_total", "advice" => label).increment(1)
        }
    }
}
