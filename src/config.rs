//! Configuration types for es-fair-value

use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::time::Duration;

/// Default upstream page carrying the fair value decomposition table
pub const DEFAULT_SOURCE_URL: &str = "https://indexarb.com/fairValueDecomposition.html";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Upstream page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Page holding the fair value decomposition table
    #[serde(default = "default_source_url")]
    pub url: String,

    /// User-Agent sent with the request; the page rejects default client identifiers
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout (seconds); 0 falls back to the default
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}
fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl SourceConfig {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(default_timeout_secs()),
            secs => Duration::from_secs(secs),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Prometheus exporter port; metrics are not exported when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
