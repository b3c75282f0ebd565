//! Fetch phase for Pagelens
//!
//! This module issues the one HTTP GET a scrape performs:
//! - Client construction with a profile-selected `User-Agent`
//! - A single bounded request, no retries
//! - Classification of transport and status failures
//! - Capture of headers and the declared charset

mod client;
mod page;

pub use client::{build_http_client, REQUEST_TIMEOUT};
pub use page::{fetch_page, FetchedPage};

use crate::config::ScrapeOptions;
use crate::document::Document;
use crate::url::prepare_url;
use crate::Result;

/// Fetches and parses the page described by the given options
///
/// This is the full fetch phase: prepare the URL, build the client, perform
/// the GET, and parse the body into an immutable [`Document`] ready for the
/// extractors.
///
/// # Arguments
///
/// * `options` - The per-invocation scrape options
///
/// # Returns
///
/// * `Ok(Document)` - The parsed page
/// * `Err(ScrapeError)` - URL preparation or fetch failed; no partial result
pub async fn fetch_document(options: &ScrapeOptions) -> Result<Document> {
    let url = prepare_url(&options.url)?;
    let client = build_http_client(options.profile)?;
    let page = fetch_page(&client, &url).await?;

    Ok(Document::from_page(page))
}
