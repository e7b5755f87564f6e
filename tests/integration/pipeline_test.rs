//! Integration tests for the extraction pipeline against saved pages

use es_fair_value::extract::{FieldExtractor, StructureError, TableLocator};
use es_fair_value::fetch::{DocumentFetcher, FetchError, FileFetcher};
use es_fair_value::model::MarketInputs;
use es_fair_value::service::{ApiResponse, FairValueService, PipelineError};
use es_fair_value::signal::ArbitrageAdvice;

const FAIR_VALUE_PAGE: &str = include_str!("../fixtures/fair_value_decomposition.html");
const BLANK_VALUES_PAGE: &str = include_str!("../fixtures/blank_values.html");
const LAYOUT_CHANGED_PAGE: &str = include_str!("../fixtures/layout_changed.html");

struct Page(&'static str);

#[async_trait::async_trait]
impl DocumentFetcher for Page {
    async fn fetch(&self) -> Result<String, FetchError> {
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn test_extracts_saved_page() {
    let service = FairValueService::new(Page(FAIR_VALUE_PAGE));
    let inputs = service.fetch_raw_inputs().await.unwrap();

    assert_eq!(
        inputs,
        MarketInputs {
            spx_price: 5000.0,
            es_price: 5015.0,
            interest_rate: 0.05,
            expected_dividends: 10.0,
            days_to_expiry: 30,
            divisor: None,
        }
    );
}

#[test]
fn test_extraction_is_deterministic() {
    let locator = TableLocator::new();
    let first = FieldExtractor::extract(&locator.locate(FAIR_VALUE_PAGE).unwrap()).unwrap();
    let second = FieldExtractor::extract(&locator.locate(FAIR_VALUE_PAGE).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_blank_values_become_zero() {
    let service = FairValueService::new(Page(BLANK_VALUES_PAGE));
    let inputs = service.fetch_raw_inputs().await.unwrap();

    assert_eq!(inputs.spx_price, 0.0);
    assert_eq!(inputs.es_price, 0.0);
    assert_eq!(inputs.interest_rate, 0.0);
    assert_eq!(inputs.expected_dividends, 0.0);
    assert_eq!(inputs.days_to_expiry, 0);

    // Zeroed inputs still value cleanly
    let result = service.compute_from_scrape().await.unwrap();
    assert_eq!(result.valuation.fair_value, 0.0);
    assert_eq!(result.valuation.fair_es_price, 0.0);
    assert_eq!(result.valuation.arbitrage_advice, ArbitrageAdvice::NoAction);
}

#[tokio::test]
async fn test_layout_change_is_reported() {
    let service = FairValueService::new(Page(LAYOUT_CHANGED_PAGE));

    let err = service.fetch_raw_inputs().await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Structure(StructureError::MissingTable { found: 1 })
    ));

    let raw = serde_json::to_value(ApiResponse::from(service.fetch_raw_inputs().await)).unwrap();
    let computed =
        serde_json::to_value(ApiResponse::from(service.compute_from_scrape().await)).unwrap();
    assert_eq!(raw, computed);
    assert_eq!(raw.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_short_table_is_reported() {
    let page = r#"
        <table></table>
        <table>
            <tr><th>Component</th><th>Value</th></tr>
            <tr><td>S&amp;P 500</td><td>5000</td></tr>
            <tr><td>ES</td><td>5015</td></tr>
        </table>
    "#;
    let service = FairValueService::new(Page(page));

    let err = service.compute_from_scrape().await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Structure(StructureError::MissingRows { found: 3 })
    ));
}

#[tokio::test]
async fn test_missing_value_cell_is_reported() {
    let page = FAIR_VALUE_PAGE.replacen("<td>10.00</td>", "", 1);
    let table = TableLocator::new().locate(&page).unwrap();
    // Row 4 still has two cells (label and notes), so only the text changes
    let inputs = FieldExtractor::extract(&table).unwrap();
    assert_eq!(inputs.expected_dividends, 0.0);

    let page = r#"
        <table></table>
        <table>
            <tr><th>Component</th><th>Value</th></tr>
            <tr><td>S&amp;P 500</td><td>5000</td></tr>
            <tr><td>ES</td><td>5015</td></tr>
            <tr><td>Rate</td><td>5%</td></tr>
            <tr><td>Dividends</td></tr>
            <tr><td>Days</td><td>30</td></tr>
        </table>
    "#;
    let service = FairValueService::new(Page(page));
    let response = ApiResponse::from(service.fetch_raw_inputs().await);
    let ApiResponse::Failure { error } = response else {
        panic!("expected failure");
    };
    assert!(error.contains("expected_dividends"));
}

#[tokio::test]
async fn test_file_fetcher_feeds_pipeline() {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/fair_value_decomposition.html"
    );
    let service = FairValueService::new(FileFetcher::new(path));
    let inputs = service.fetch_raw_inputs().await.unwrap();
    assert_eq!(inputs.days_to_expiry, 30);
}
