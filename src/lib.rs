//! es-fair-value: SPX/ES futures fair value and index arbitrage signal
//!
//! This library provides the core components for:
//! - Fetching the published fair value decomposition page
//! - Locating its table and extracting the five decomposition figures
//! - Cost-of-carry fair value of ES against SPX
//! - Directional index arbitrage advice
//! - An HTTP service and CLI over the pipeline
//! - Logging and metrics

pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod server;
pub mod service;
pub mod signal;
pub mod telemetry;
