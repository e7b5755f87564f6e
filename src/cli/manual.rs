//! Manual command implementation

use super::print_json;
use crate::model::{CostOfCarryModel, MarketInputs};
use crate::signal::ArbitrageDetector;
use clap::Args;

#[derive(Args, Debug)]
pub struct ManualArgs {
    /// SPX cash index level
    #[arg(long)]
    pub spx: f64,

    /// Current ES futures price
    #[arg(long)]
    pub es: f64,

    /// Annual interest rate in percent (5.33 for 5.33%)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Expected dividends until expiry
    #[arg(long, allow_negative_numbers = true)]
    pub dividends: f64,

    /// Calendar days until expiry
    #[arg(long)]
    pub days: u32,

    /// Index divisor applied to the dividends
    #[arg(long)]
    pub divisor: Option<f64>,
}

impl ManualArgs {
    pub fn inputs(&self) -> MarketInputs {
        MarketInputs {
            spx_price: self.spx,
            es_price: self.es,
            interest_rate: self.rate / 100.0,
            expected_dividends: self.dividends,
            days_to_expiry: self.days,
            divisor: self.divisor,
        }
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        let detector = ArbitrageDetector::new(CostOfCarryModel::new());
        let inputs = self.inputs();
        print_json(&detector.evaluate(&inputs, inputs.es_price))
    }
}
