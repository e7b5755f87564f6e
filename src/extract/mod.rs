//! Extraction module
//!
//! Locates the fair value decomposition table in the upstream page and reads
//! its five figures. Layout problems (missing table, rows or cells) are errors;
//! unreadable numbers inside a well-formed cell fall back to zero.

mod extractor;
mod fields;
mod locator;

pub use extractor::FieldExtractor;
pub use fields::{parse_day_count, parse_number, parse_percent, ParsedField};
pub use locator::{FairValueTable, TableLocator, TableRow};

use thiserror::Error;

/// Page layout no longer matches the expected table shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("Page layout changed: expected at least 2 tables, found {found}")]
    MissingTable { found: usize },
    #[error("Page layout changed: expected at least 6 table rows, found {found}")]
    MissingRows { found: usize },
}

/// A required cell could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Error parsing data: row {row} ({field}) has no cell {cell}")]
    MissingCell {
        row: usize,
        cell: usize,
        field: &'static str,
    },
}
