//! Output module for rendering and exporting scrape reports
//!
//! This module handles:
//! - Console rendering of a report
//! - JSON export to a file
//! - Row/column tabular views of each result set

mod console;
mod json;
mod tabular;

pub use console::print_report;
pub use json::{format_json_report, write_json_report};
pub use tabular::Tabular;

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
