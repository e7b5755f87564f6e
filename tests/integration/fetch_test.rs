//! Integration tests for the HTTP fetcher against a local upstream

use axum::{http::HeaderMap, http::StatusCode, response::Html, routing::get, Router};
use es_fair_value::config::SourceConfig;
use es_fair_value::fetch::{DocumentFetcher, FetchError, HttpFetcher};
use es_fair_value::service::FairValueService;
use std::net::SocketAddr;
use std::time::Duration;

/// Echo the User-Agent back inside the value cell of the SPX row
async fn echo_user_agent(headers: HeaderMap) -> Html<String> {
    let agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Html(format!(
        "<table></table><table>\
         <tr><th>k</th><th>v</th></tr>\
         <tr><td>agent</td><td>{agent}</td></tr>\
         <tr><td>es</td><td>5015</td></tr>\
         <tr><td>rate</td><td>5%</td></tr>\
         <tr><td>div</td><td>10</td></tr>\
         <tr><td>days</td><td>30</td></tr>\
         </table>"
    ))
}

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/page", get(echo_user_agent))
        .route(
            "/fixture",
            get(|| async { Html(include_str!("../fixtures/fair_value_decomposition.html")) }),
        )
        .route("/down", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
        .route("/moved", get(|| async { (StatusCode::NO_CONTENT, "") }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn source(addr: SocketAddr, path: &str) -> SourceConfig {
    SourceConfig {
        url: format!("http://{addr}{path}"),
        ..SourceConfig::default()
    }
}

#[tokio::test]
async fn test_sends_browser_user_agent() {
    let addr = spawn_upstream().await;
    let mut config = source(addr, "/page");
    config.user_agent = "Mozilla/5.0 (fixture)".to_string();

    let body = HttpFetcher::new(&config).unwrap().fetch().await.unwrap();
    assert!(body.contains("<td>Mozilla/5.0 (fixture)</td>"));
}

#[tokio::test]
async fn test_live_fetch_through_pipeline() {
    let addr = spawn_upstream().await;
    let fetcher = HttpFetcher::new(&source(addr, "/fixture")).unwrap();
    let service = FairValueService::new(fetcher);

    let result = service.compute_from_scrape().await.unwrap();
    assert_eq!(result.valuation.fair_es_price, 5010.09);
}

#[tokio::test]
async fn test_non_200_is_fetch_error() {
    let addr = spawn_upstream().await;

    let err = HttpFetcher::new(&source(addr, "/down"))
        .unwrap()
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status(503)));

    // Success codes other than 200 are rejected too
    let err = HttpFetcher::new(&source(addr, "/moved"))
        .unwrap()
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status(204)));
}

#[tokio::test]
async fn test_timeout_is_fetch_error() {
    let addr = spawn_upstream().await;
    let config = SourceConfig {
        timeout_secs: 1,
        ..source(addr, "/slow")
    };

    let err = HttpFetcher::new(&config).unwrap().fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_upstream_is_fetch_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpFetcher::new(&source(addr, "/page"))
        .unwrap()
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.to_string().starts_with("Unable to retrieve data"));
}
