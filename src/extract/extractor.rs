//! Field extraction from the located table

use super::fields::{parse_day_count, parse_number, parse_percent, ParsedField};
use super::{ExtractionError, FairValueTable};
use crate::model::MarketInputs;
use crate::telemetry::{self, CounterMetric};

/// Column holding each field's value
const VALUE_CELL: usize = 1;

const SPX_ROW: usize = 1;
const ES_ROW: usize = 2;
const RATE_ROW: usize = 3;
const DIVIDENDS_ROW: usize = 4;
const DAYS_ROW: usize = 5;

/// Reads the five decomposition figures out of a [`FairValueTable`]
pub struct FieldExtractor;

impl FieldExtractor {
    /// Build [`MarketInputs`] from the table
    ///
    /// Missing rows or cells are errors. Unreadable cell text is not: the
    /// field becomes zero and a warning is logged.
    pub fn extract(table: &FairValueTable) -> Result<MarketInputs, ExtractionError> {
        let spx_price = field(table, SPX_ROW, "spx_price", parse_number)?;
        let es_price = field(table, ES_ROW, "es_price", parse_number)?;
        let interest_rate = field(table, RATE_ROW, "interest_rate", parse_percent)?;
        let expected_dividends = field(table, DIVIDENDS_ROW, "expected_dividends", parse_number)?;
        let days_to_expiry = field(table, DAYS_ROW, "days_to_expiry", parse_day_count)?;

        Ok(MarketInputs {
            spx_price,
            es_price,
            interest_rate,
            expected_dividends,
            days_to_expiry,
            divisor: None,
        })
    }
}

fn field<T>(
    table: &FairValueTable,
    row: usize,
    name: &'static str,
    parse: fn(&str) -> ParsedField<T>,
) -> Result<T, ExtractionError> {
    let text = table
        .row(row)
        .and_then(|r| r.cell(VALUE_CELL))
        .ok_or(ExtractionError::MissingCell {
            row,
            cell: VALUE_CELL,
            field: name,
        })?;

    let parsed = parse(text);
    if parsed.used_default {
        tracing::warn!(field = name, raw = text, "Unreadable value, using zero");
        telemetry::increment(CounterMetric::FieldDefaulted, name);
    }

    Ok(parsed.value)
}
