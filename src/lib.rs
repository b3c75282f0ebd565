//! Pagelens: a single-page fact extractor
//!
//! This crate fetches one web page and derives structured result sets from it:
//! page metadata, hyperlinks, images, tabular data, classified text blocks,
//! and email addresses found in the page text.

pub mod config;
pub mod document;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Pagelens operations
///
/// Only the fetch phase can fail a scrape. The extractors are total over a
/// valid [`document::Document`]: missing metadata, malformed tables, or zero
/// selector matches resolve to defaults or empty result sets, never errors.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Pagelens operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{IdentityProfile, ScrapeOptions, TargetTag};
pub use document::Document;
pub use extract::{extract_all, ScrapeReport};
// `crate::` disambiguates from the `url` dependency itself
pub use crate::url::{prepare_url, resolve_href, same_host};
