//! Page metadata extraction
//!
//! Reads the page title, the description meta tag, the declared charset, and
//! the `Server` response header. Every field degrades to a documented default
//! when its source is missing; this extractor has no failure mode.

use crate::document::Document;
use scraper::Selector;
use serde::Serialize;

/// Metadata derived from one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// `<title>` text, or "No Title"
    pub title: String,

    /// `<meta name="description">` content, or "No Description"
    pub description: String,

    /// Charset declared by the response, or "Unknown"
    pub charset: String,

    /// `Server` response header, or "Unknown"
    pub server: String,
}

/// Extracts page metadata
pub fn extract_metadata(document: &Document) -> PageMetadata {
    PageMetadata {
        title: page_title(document).unwrap_or_else(|| "No Title".to_string()),
        description: page_description(document)
            .unwrap_or_else(|| "No Description".to_string()),
        charset: document
            .encoding()
            .map(str::to_string)
            .unwrap_or_else(|| "Unknown".to_string()),
        server: document
            .header("server")
            .map(str::to_string)
            .unwrap_or_else(|| "Unknown".to_string()),
    }
}

/// Extracts the page title, treating an empty `<title>` as absent
fn page_title(document: &Document) -> Option<String> {
    let selector = Selector::parse("title").ok()?;

    document
        .tree()
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Extracts the description meta tag's content attribute
fn page_description(document: &Document) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;

    document
        .tree()
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}
