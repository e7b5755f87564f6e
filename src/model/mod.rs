//! Fair value model module
//!
//! Calculates the theoretical ES futures price from the SPX cash level using
//! cost of carry less expected dividends

mod carry;
mod types;

pub use carry::{round_cents, CostOfCarryModel};
pub use types::{MarketInputs, ValuationResult};

use serde::{Deserialize, Serialize};

/// Parameters for fair value calculation
#[derive(Debug, Clone, PartialEq)]
pub struct FairValueParams {
    /// Cash index level
    pub spot_price: f64,
    /// Annualized rate as a decimal fraction
    pub interest_rate: f64,
    /// Calendar days until the contract expires
    pub days_to_expiry: u32,
    /// Expected dividends over the horizon, absolute
    pub expected_dividends: f64,
    /// Index divisor converting dividends into index points
    pub divisor: Option<f64>,
}

impl From<&MarketInputs> for FairValueParams {
    fn from(inputs: &MarketInputs) -> Self {
        Self {
            spot_price: inputs.spx_price,
            interest_rate: inputs.interest_rate,
            days_to_expiry: inputs.days_to_expiry,
            expected_dividends: inputs.expected_dividends,
            divisor: inputs.divisor,
        }
    }
}

/// Calculated fair value, both figures rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairValue {
    /// Futures premium over cash
    pub fair_value: f64,
    /// Theoretical futures price
    pub fair_es_price: f64,
}

/// Trait for fair value model implementations
pub trait FairValueModel: Send + Sync {
    /// Calculate fair value given parameters
    fn calculate(&self, params: FairValueParams) -> FairValue;
}
