//! HTTP server
//!
//! Exposes the fair value service over axum. Scrape failures and malformed
//! manual input are answered with a `{"error": ...}` body and status 200.

mod form;
mod routes;

pub use form::{ManualInputForm, FORM_PAGE};

use crate::config::ServerConfig;
use crate::fetch::DocumentFetcher;
use crate::service::FairValueService;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the router around a shared service
pub fn router<F: DocumentFetcher + 'static>(service: Arc<FairValueService<F>>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health))
        .route("/fetch-data", get(routes::fetch_data::<F>))
        .route("/calculate-fair-value", get(routes::calculate_fair_value::<F>))
        .route(
            "/manual",
            get(routes::manual_form).post(routes::manual_from_form::<F>),
        )
        .route("/api/manual", post(routes::manual_from_json::<F>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Bind and serve until Ctrl-C
pub async fn serve<F: DocumentFetcher + 'static>(
    config: &ServerConfig,
    service: Arc<FairValueService<F>>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(address = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
