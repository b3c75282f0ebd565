//! The extraction engine
//!
//! Five independent extractors, each a pure function of an immutable
//! [`Document`](crate::document::Document) (and, through it, the page URL):
//! - Metadata: title, description, charset, server
//! - Links: resolved, classified, deduplicated anchors
//! - Images: resolved, deduplicated image references
//! - Tables: header-detected tabular data
//! - Text and emails: tag-grouped text blocks and the page's email set
//!
//! Extractors never fail; local anomalies resolve to defaults or empty
//! result sets. [`extract_all`] composes them into one report.

mod images;
mod links;
mod metadata;
mod report;
mod tables;
mod text;

pub use images::{extract_images, Image};
pub use links::{extract_links, Link, LinkKind, DISPLAY_TEXT_LIMIT};
pub use metadata::{extract_metadata, PageMetadata};
pub use report::{extract_all, ScrapeReport, ScrapeSummary};
pub use tables::{extract_tables, ExtractedTable};
pub use text::{extract_emails, extract_text_blocks, TextBlock};
