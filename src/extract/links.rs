//! Hyperlink extraction
//!
//! Walks every anchor carrying an `href` in document order, resolves each
//! reference against the page URL, derives a bounded display text, and
//! classifies the link by host. Exact duplicate rows are dropped afterwards,
//! keeping first occurrences; nothing else is reordered.

use crate::document::Document;
use crate::url::{resolve_href, same_host};
use scraper::Selector;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Character budget for a link's display text
pub const DISPLAY_TEXT_LIMIT: usize = 50;

/// Marker appended to truncated display text; not counted against the budget
const TRUNCATION_MARKER: &str = "...";

/// Classification of a link by host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LinkKind {
    /// Resolved host equals the page host
    Internal,
    /// Any other host, or no host at all
    External,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => f.write_str("Internal"),
            Self::External => f.write_str("External"),
        }
    }
}

/// One extracted hyperlink
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    /// Trimmed display text, truncated to [`DISPLAY_TEXT_LIMIT`] characters
    pub text: String,

    /// Absolute URL, resolved against the page
    pub url: String,

    /// Internal/External classification
    pub kind: LinkKind,
}

/// Extracts all hyperlinks from a document
///
/// Returns an empty vec when the page has no anchors; that is a normal
/// result, not a failure.
pub fn extract_links(document: &Document) -> Vec<Link> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.tree().select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            let Some(resolved) = resolve_href(document.url(), href) else {
                continue;
            };

            let kind = if same_host(document.url(), &resolved) {
                LinkKind::Internal
            } else {
                LinkKind::External
            };

            links.push(Link {
                text: display_text(&element.text().collect::<String>()),
                url: resolved.to_string(),
                kind,
            });
        }
    }

    dedup_stable(links)
}

/// Derives the bounded display text for a link
///
/// Counts characters, not bytes; the truncation marker sits outside the
/// 50-character budget, so a 50-character text passes through unchanged.
fn display_text(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let head: String = chars.by_ref().take(DISPLAY_TEXT_LIMIT).collect();

    if chars.next().is_some() {
        format!("{}{}", head, TRUNCATION_MARKER)
    } else {
        head
    }
}

/// Drops exact duplicate rows, keeping the first occurrence of each
fn dedup_stable(links: Vec<Link>) -> Vec<Link> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
