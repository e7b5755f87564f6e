//! Arbitrage signal detection

use super::ArbitrageAdvice;
use crate::model::{FairValueModel, FairValueParams, MarketInputs, ValuationResult};
use crate::telemetry::{self, CounterMetric};
use std::cmp::Ordering;

/// Values futures against cash and issues arbitrage advice
pub struct ArbitrageDetector<M: FairValueModel> {
    model: M,
}

impl<M: FairValueModel> ArbitrageDetector<M> {
    /// Create a new detector around a fair value model
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Compare the observed futures price with its fair price
    ///
    /// Exact equality (at cent precision) gives [`ArbitrageAdvice::NoAction`].
    pub fn advise(current_es_price: f64, fair_es_price: f64) -> ArbitrageAdvice {
        match current_es_price.partial_cmp(&fair_es_price) {
            Some(Ordering::Greater) => ArbitrageAdvice::ShortFutures,
            Some(Ordering::Less) => ArbitrageAdvice::LongFutures,
            // NaN only comes from non-finite manual input; nothing to act on
            Some(Ordering::Equal) | None => ArbitrageAdvice::NoAction,
        }
    }

    /// Value the inputs and advise against `current_es_price`
    pub fn evaluate(&self, inputs: &MarketInputs, current_es_price: f64) -> ValuationResult {
        let fair = self.model.calculate(FairValueParams::from(inputs));
        let arbitrage_advice = Self::advise(current_es_price, fair.fair_es_price);

        tracing::debug!(
            spx_price = inputs.spx_price,
            current_es_price,
            fair_value = fair.fair_value,
            fair_es_price = fair.fair_es_price,
            advice = arbitrage_advice.label(),
            "Valuation complete"
        );
        telemetry::increment(CounterMetric::Valuation, arbitrage_advice.label());

        ValuationResult {
            fair_value: fair.fair_value,
            fair_es_price: fair.fair_es_price,
            arbitrage_advice,
        }
    }
}
