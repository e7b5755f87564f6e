//! Valuation input and output types

use crate::signal::ArbitrageAdvice;
use serde::{Deserialize, Serialize};

/// The five figures of the fair value decomposition, plus an optional divisor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// SPX cash index level
    pub spx_price: f64,
    /// ES futures price
    pub es_price: f64,
    /// Annualized rate as a decimal fraction (5% is 0.05)
    pub interest_rate: f64,
    /// Expected dividends until expiry, absolute
    pub expected_dividends: f64,
    /// Calendar days until expiry
    pub days_to_expiry: u32,
    /// Index divisor; only supplied on manual input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divisor: Option<f64>,
}

/// Fair value and the resulting arbitrage advice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub fair_value: f64,
    pub fair_es_price: f64,
    pub arbitrage_advice: ArbitrageAdvice,
}
