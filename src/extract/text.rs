//! Text block and email extraction
//!
//! Text blocks follow the caller's tag selection: for each tag in the given
//! order, every matching element in document order yields one block. The
//! result is therefore grouped by tag rather than globally document-ordered.
//! That is a deliberate property downstream consumers rely on; do not "fix" it.
//!
//! The email scan is a separate pass over the whole page's visible text and
//! ignores the tag selection entirely.

use crate::config::TargetTag;
use crate::document::Document;
use regex::Regex;
use scraper::Selector;
use serde::Serialize;
use std::collections::BTreeSet;

/// Email syntax: local part, `@`, domain, and an alphabetic TLD of length ≥ 2
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// One classified block of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    /// The tag the block came from
    pub tag: String,

    /// The element's trimmed visible text; may be empty
    pub content: String,
}

/// Extracts text blocks for an ordered tag selection
///
/// Elements with empty text still produce a block; an empty heading is a
/// fact about the page.
pub fn extract_text_blocks(document: &Document, tags: &[TargetTag]) -> Vec<TextBlock> {
    let mut blocks = Vec::new();

    for tag in tags {
        if let Ok(selector) = Selector::parse(tag.as_str()) {
            for element in document.tree().select(&selector) {
                blocks.push(TextBlock {
                    tag: tag.to_string(),
                    content: element.text().collect::<String>().trim().to_string(),
                });
            }
        }
    }

    blocks
}

/// Extracts the set of email addresses appearing in the page text
///
/// Purely syntactic matching; values are kept verbatim as matched. The set
/// collapses duplicates and iterates in a stable order, so repeated runs
/// over the same document serialize identically.
pub fn extract_emails(document: &Document) -> BTreeSet<String> {
    let mut emails = BTreeSet::new();

    if let Ok(pattern) = Regex::new(EMAIL_PATTERN) {
        let text = document.full_text();
        for found in pattern.find_iter(&text) {
            emails.insert(found.as_str().to_string());
        }
    }

    emails
}
