//! Signal generation module
//!
//! Turns a fair value into directional index arbitrage advice

mod detector;
mod types;

pub use detector::ArbitrageDetector;
pub use types::ArbitrageAdvice;
