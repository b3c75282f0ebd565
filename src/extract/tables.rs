//! Table extraction
//!
//! Attempts to interpret every `<table>` element as tabular data. The first
//! row supplies the column names (its `th` cells when it has any, otherwise
//! its `td` cells); remaining rows are padded or truncated to that column
//! count. Tables that cannot be interpreted are skipped; the skip is a typed
//! outcome logged at debug level, but the public result is simply a shorter
//! list, never an error.

use crate::document::Document;
use scraper::{ElementRef, Selector};
use serde::Serialize;
use thiserror::Error;

/// One interpreted table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedTable {
    /// Sequential label, `Table 1` onward, in document order of the
    /// tables that parsed
    pub label: String,

    /// Column names from the detected header row
    pub headers: Vec<String>,

    /// Data rows; every row has exactly `headers.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl ExtractedTable {
    /// Number of columns in this table
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Why a `<table>` element could not be interpreted
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TableSkip {
    #[error("table has no rows")]
    NoRows,

    #[error("first row has no cells")]
    NoCells,
}

/// The selectors table interpretation relies on
struct TableSelectors {
    row: Selector,
    header_cell: Selector,
    cell: Selector,
}

impl TableSelectors {
    fn new() -> Option<Self> {
        Some(Self {
            row: Selector::parse("tr").ok()?,
            header_cell: Selector::parse("th").ok()?,
            cell: Selector::parse("th, td").ok()?,
        })
    }
}

/// Extracts all interpretable tables from a document
///
/// Labels are assigned to the tables that parse, in document order, so the
/// sequence `Table 1`, `Table 2`, … is gapless even when a malformed table
/// sits between two good ones.
pub fn extract_tables(document: &Document) -> Vec<ExtractedTable> {
    let mut tables = Vec::new();

    let Some(selectors) = TableSelectors::new() else {
        return tables;
    };

    if let Ok(table_selector) = Selector::parse("table") {
        for (position, element) in document.tree().select(&table_selector).enumerate() {
            match interpret_table(element, &selectors, tables.len() + 1) {
                Ok(table) => tables.push(table),
                Err(skip) => {
                    tracing::debug!("Skipping table #{} in document: {}", position + 1, skip);
                }
            }
        }
    }

    tables
}

/// Interprets a single `<table>` element
fn interpret_table(
    element: ElementRef,
    selectors: &TableSelectors,
    number: usize,
) -> Result<ExtractedTable, TableSkip> {
    let mut row_iter = element.select(&selectors.row);

    let first_row = row_iter.next().ok_or(TableSkip::NoRows)?;

    // Header policy: th cells when the first row has any, else its td cells.
    let mut headers: Vec<String> = first_row
        .select(&selectors.header_cell)
        .map(cell_text)
        .collect();
    if headers.is_empty() {
        headers = first_row.select(&selectors.cell).map(cell_text).collect();
    }

    if headers.is_empty() {
        return Err(TableSkip::NoCells);
    }

    let column_count = headers.len();
    let rows: Vec<Vec<String>> = row_iter
        .map(|row| {
            let mut cells: Vec<String> = row.select(&selectors.cell).map(cell_text).collect();
            // Pads short rows with empty cells, truncates long ones.
            cells.resize(column_count, String::new());
            cells
        })
        .collect();

    Ok(ExtractedTable {
        label: format!("Table {}", number),
        headers,
        rows,
    })
}

/// A cell's trimmed visible text
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
