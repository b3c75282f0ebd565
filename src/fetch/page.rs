//! The single GET request and its classified outcomes
//!
//! The fetch phase is the only part of a scrape that can fail. A non-2xx
//! status, a timeout, or any transport error aborts the whole operation
//! before extraction starts; there is no retry.

use crate::ScrapeError;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::collections::HashMap;
use url::Url;

/// The raw material of one fetched page
#[derive(Debug)]
pub struct FetchedPage {
    /// The requested page URL (base for reference resolution)
    pub url: Url,

    /// Final HTTP status code
    pub status: u16,

    /// Response headers, names lowercased, first value per name
    pub headers: HashMap<String, String>,

    /// Charset declared in the `Content-Type` header, if any
    pub encoding: Option<String>,

    /// Response body
    pub body: String,
}

/// Performs the single GET request for a scrape
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The prepared page URL
///
/// # Returns
///
/// * `Ok(FetchedPage)` - 2xx response with body and headers captured
/// * `Err(ScrapeError)` - Timeout, transport failure, or non-2xx status
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, ScrapeError> {
    tracing::info!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_transport_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let headers = flatten_headers(response.headers());
    let encoding = headers
        .get("content-type")
        .and_then(|value| declared_charset(value));

    let body = response
        .text()
        .await
        .map_err(|e| classify_transport_error(url, e))?;

    tracing::debug!("Fetched {} ({}, {} bytes)", url, status, body.len());

    Ok(FetchedPage {
        url: url.clone(),
        status: status.as_u16(),
        headers,
        encoding,
        body,
    })
}

/// Maps a reqwest error onto the fetch failure classes
fn classify_transport_error(url: &Url, error: reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScrapeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Flattens response headers into a lookup map
///
/// Header names are lowercased; for repeated headers the first value wins.
/// Values that are not valid UTF-8 are dropped.
fn flatten_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for (name, value) in headers {
        if let Ok(text) = value.to_str() {
            map.entry(name.as_str().to_ascii_lowercase())
                .or_insert_with(|| text.to_string());
        }
    }

    map
}

/// Extracts the `charset` parameter from a `Content-Type` header value
///
/// The value is preserved verbatim (minus surrounding quotes); consumers
/// display it rather than decode with it, since reqwest already produced
/// a decoded body.
fn declared_charset(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"').to_string())
        } else {
            None
        }
    })
}
