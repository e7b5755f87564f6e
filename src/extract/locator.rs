//! Table location within the upstream HTML

use super::StructureError;
use scraper::{ElementRef, Html, Selector};

/// Index of the fair value table among the page's tables; the first is page chrome
const TABLE_INDEX: usize = 1;

/// Header row plus one row per extracted field
pub const MIN_ROWS: usize = 6;

/// One `<tr>` reduced to the text of its `<td>` cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    /// Text of the cell at `index`, if the row has one
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// Owned copy of the located table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FairValueTable {
    pub rows: Vec<TableRow>,
}

impl FairValueTable {
    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }
}

/// Finds the fair value table in a page
pub struct TableLocator {
    table: Selector,
    row: Selector,
    cell: Selector,
}

impl TableLocator {
    pub fn new() -> Self {
        Self {
            table: selector("table"),
            row: selector("tr"),
            cell: selector("td"),
        }
    }

    /// Parse `html` and copy out the second table
    ///
    /// Tables, rows and cells are matched anywhere below their parent, in
    /// document order.
    pub fn locate(&self, html: &str) -> Result<FairValueTable, StructureError> {
        let document = Html::parse_document(html);

        let tables: Vec<ElementRef<'_>> = document.select(&self.table).collect();
        let table = tables
            .get(TABLE_INDEX)
            .ok_or(StructureError::MissingTable {
                found: tables.len(),
            })?;

        let rows: Vec<TableRow> = table
            .select(&self.row)
            .map(|tr| TableRow {
                cells: tr
                    .select(&self.cell)
                    .map(|td| td.text().collect::<String>())
                    .collect(),
            })
            .collect();

        if rows.len() < MIN_ROWS {
            return Err(StructureError::MissingRows { found: rows.len() });
        }

        tracing::trace!(rows = rows.len(), "Located fair value table");
        Ok(FairValueTable { rows })
    }
}

impl Default for TableLocator {
    fn default() -> Self {
        Self::new()
    }
}

fn selector(tag: &'static str) -> Selector {
    Selector::parse(tag).expect("Invalid tag selector")
}
