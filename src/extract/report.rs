//! Result aggregation
//!
//! Runs the five extractors over one document and bundles their outputs with
//! summary counts. Pure composition: each extractor is total over a valid
//! document, so none of them can abort a sibling, and the aggregator itself
//! performs no transformation.

use crate::config::TargetTag;
use crate::document::Document;
use crate::extract::images::{extract_images, Image};
use crate::extract::links::{extract_links, Link};
use crate::extract::metadata::{extract_metadata, PageMetadata};
use crate::extract::tables::{extract_tables, ExtractedTable};
use crate::extract::text::{extract_emails, extract_text_blocks, TextBlock};
use serde::Serialize;
use std::collections::BTreeSet;

/// Headline counts for one scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrapeSummary {
    pub link_count: usize,
    pub image_count: usize,
    pub table_count: usize,
    pub status_code: u16,
}

/// Everything derived from one page
#[derive(Debug, Serialize)]
pub struct ScrapeReport {
    pub metadata: PageMetadata,
    pub links: Vec<Link>,
    pub images: Vec<Image>,
    pub text_blocks: Vec<TextBlock>,
    pub emails: BTreeSet<String>,
    pub tables: Vec<ExtractedTable>,
    pub summary: ScrapeSummary,
}

/// Runs all extractors over a document and bundles the results
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `tags` - Ordered tag selection for the text extractor
pub fn extract_all(document: &Document, tags: &[TargetTag]) -> ScrapeReport {
    let metadata = extract_metadata(document);
    let links = extract_links(document);
    let images = extract_images(document);
    let text_blocks = extract_text_blocks(document, tags);
    let emails = extract_emails(document);
    let tables = extract_tables(document);

    let summary = ScrapeSummary {
        link_count: links.len(),
        image_count: images.len(),
        table_count: tables.len(),
        status_code: document.status(),
    };

    ScrapeReport {
        metadata,
        links,
        images,
        text_blocks,
        emails,
        tables,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_tags;
    use std::collections::HashMap;
    use url::Url;

    const PAGE: &str = r#"<html>
        <head>
            <title>Fixture</title>
            <meta name="description" content="A small page">
        </head>
        <body>
            <h1>Welcome</h1>
            <p>Reach us at info@example.com.</p>
            <a href="/about">About</a>
            <a href="https://other.com/">Elsewhere</a>
            <img src="/logo.png" alt="Logo">
            <table><tr><th>K</th></tr><tr><td>v</td></tr></table>
        </body>
    </html>"#;

    fn doc() -> Document {
        Document::parse(
            PAGE,
            Url::parse("https://example.com/").unwrap(),
            200,
            HashMap::new(),
            None,
        )
    }

    #[test]
    fn test_summary_counts_match_result_sets() {
        let report = extract_all(&doc(), &default_tags());

        assert_eq!(report.summary.link_count, report.links.len());
        assert_eq!(report.summary.image_count, report.images.len());
        assert_eq!(report.summary.table_count, report.tables.len());
        assert_eq!(report.summary.status_code, 200);

        assert_eq!(report.links.len(), 2);
        assert_eq!(report.images.len(), 1);
        assert_eq!(report.tables.len(), 1);
        assert!(report.emails.contains("info@example.com"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let document = doc();
        let tags = default_tags();

        let first = serde_json::to_string(&extract_all(&document, &tags)).unwrap();
        let second = serde_json::to_string(&extract_all(&document, &tags)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_page_produces_empty_sets_not_errors() {
        let document = Document::parse(
            "<html><body></body></html>",
            Url::parse("https://example.com/").unwrap(),
            204,
            HashMap::new(),
            None,
        );

        let report = extract_all(&document, &default_tags());

        assert!(report.links.is_empty());
        assert!(report.images.is_empty());
        assert!(report.text_blocks.is_empty());
        assert!(report.emails.is_empty());
        assert!(report.tables.is_empty());
        assert_eq!(report.metadata.title, "No Title");
        assert_eq!(report.summary.status_code, 204);
    }

    #[test]
    fn test_malformed_table_does_not_disturb_siblings() {
        let document = Document::parse(
            r#"<body>
                <table></table>
                <a href="/still-here">Link</a>
                <p>text survives</p>
            </body>"#,
            Url::parse("https://example.com/").unwrap(),
            200,
            HashMap::new(),
            None,
        );

        let report = extract_all(&document, &default_tags());

        assert!(report.tables.is_empty());
        assert_eq!(report.links.len(), 1);
        assert_eq!(report.text_blocks.len(), 1);
    }
}
