//! Cost-of-carry fair value model
//!
//! interest = S * ((1 + r)^(days / 365) - 1)
//! fair_value = interest - dividends
//! fair_es = S + fair_value

use super::{FairValue, FairValueModel, FairValueParams};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const DAYS_PER_YEAR: f64 = 365.0;

/// Cost-of-carry fair value model
pub struct CostOfCarryModel;

impl CostOfCarryModel {
    /// Create a new cost-of-carry model
    pub fn new() -> Self {
        Self
    }

    /// Financing cost of holding the cash index until expiry
    pub fn interest_component(spot_price: f64, interest_rate: f64, days_to_expiry: u32) -> f64 {
        let t_years = f64::from(days_to_expiry) / DAYS_PER_YEAR;
        spot_price * ((1.0 + interest_rate).powf(t_years) - 1.0)
    }

    /// Dividends expressed in index points
    ///
    /// A zero divisor is treated as absent.
    pub fn dividend_component(expected_dividends: f64, divisor: Option<f64>) -> f64 {
        match divisor {
            Some(d) if d != 0.0 => expected_dividends / d,
            _ => expected_dividends,
        }
    }
}

impl Default for CostOfCarryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FairValueModel for CostOfCarryModel {
    fn calculate(&self, params: FairValueParams) -> FairValue {
        let interest = Self::interest_component(
            params.spot_price,
            params.interest_rate,
            params.days_to_expiry,
        );
        let dividends = Self::dividend_component(params.expected_dividends, params.divisor);

        let fair_value = interest - dividends;
        let fair_es_price = params.spot_price + fair_value;

        FairValue {
            fair_value: round_cents(fair_value),
            fair_es_price: round_cents(fair_es_price),
        }
    }
}

/// Round to 2 decimal places
///
/// Rounds the exact binary value half-to-even, so 2.675 (stored as
/// 2.67499999...) becomes 2.67. Non-finite values pass through unchanged.
pub fn round_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .and_then(|d| d.round_dp(2).to_f64())
        .unwrap_or(value)
}
