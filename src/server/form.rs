//! Manual input form

use crate::model::MarketInputs;
use serde::{Deserialize, Deserializer};

/// Fields posted by [`FORM_PAGE`]
///
/// `interest_rate` is entered as a percentage, the way the source page
/// quotes it. `divisor` may be left blank.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualInputForm {
    pub spx_price: f64,
    pub es_price: f64,
    pub interest_rate: f64,
    pub expected_dividends: f64,
    pub days_to_expiry: u32,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub divisor: Option<f64>,
}

impl From<ManualInputForm> for MarketInputs {
    fn from(form: ManualInputForm) -> Self {
        Self {
            spx_price: form.spx_price,
            es_price: form.es_price,
            interest_rate: form.interest_rate / 100.0,
            expected_dividends: form.expected_dividends,
            days_to_expiry: form.days_to_expiry,
            divisor: form.divisor,
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

pub const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>ES Fair Value</title>
</head>
<body>
  <h1>ES fair value calculator</h1>
  <form action="/manual" method="post">
    <p><label>SPX price <input name="spx_price" type="number" step="any" required></label></p>
    <p><label>ES price <input name="es_price" type="number" step="any" required></label></p>
    <p><label>Interest rate (%) <input name="interest_rate" type="number" step="any" required></label></p>
    <p><label>Expected dividends <input name="expected_dividends" type="number" step="any" required></label></p>
    <p><label>Days to expiry <input name="days_to_expiry" type="number" min="0" step="1" required></label></p>
    <p><label>Index divisor (optional) <input name="divisor" type="number" step="any"></label></p>
    <p><button type="submit">Calculate</button></p>
  </form>
</body>
</html>
"#;
