//! The document model: one fetched page, parsed and immutable
//!
//! A [`Document`] couples the parsed HTML tree with the page's own URL,
//! status code, response headers, and declared encoding. It is constructed
//! once per scrape and only read afterwards; every extractor takes `&Document`
//! and writes to its own result structure.
//!
//! Parsing is permissive: `scraper` builds a best-effort tree from malformed
//! markup and never fails, so document construction has no error path.

use crate::fetch::FetchedPage;
use scraper::Html;
use std::collections::HashMap;
use url::Url;

/// One parsed page
#[derive(Debug)]
pub struct Document {
    url: Url,
    status: u16,
    headers: HashMap<String, String>,
    encoding: Option<String>,
    html: Html,
}

impl Document {
    /// Parses a page body into a document
    ///
    /// # Arguments
    ///
    /// * `body` - The raw page markup
    /// * `url` - The page's own URL (base for reference resolution)
    /// * `status` - Final HTTP status code
    /// * `headers` - Response headers, names lowercased
    /// * `encoding` - Charset declared by the response, if any
    pub fn parse(
        body: &str,
        url: Url,
        status: u16,
        headers: HashMap<String, String>,
        encoding: Option<String>,
    ) -> Self {
        Self {
            url,
            status,
            headers,
            encoding,
            html: Html::parse_document(body),
        }
    }

    /// Builds a document from a completed fetch
    pub fn from_page(page: FetchedPage) -> Self {
        Self::parse(
            &page.body,
            page.url,
            page.status,
            page.headers,
            page.encoding,
        )
    }

    /// The page's own URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Final HTTP status code of the fetch
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Charset declared by the response, if any
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Looks up a response header, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The parsed HTML tree, for selector matching
    pub fn tree(&self) -> &Html {
        &self.html
    }

    /// The whole page's visible text
    ///
    /// Text nodes in document order, concatenated verbatim. Used by the
    /// email scan, which is independent of any tag selection.
    pub fn full_text(&self) -> String {
        self.html.root_element().text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Document {
        Document::parse(
            body,
            Url::parse("https://example.com/").unwrap(),
            200,
            HashMap::new(),
            None,
        )
    }

    #[test]
    fn test_parse_well_formed() {
        let document = doc("<html><head><title>T</title></head><body><p>hi</p></body></html>");
        assert_eq!(document.status(), 200);
        assert_eq!(document.url().as_str(), "https://example.com/");
    }

    #[test]
    fn test_parse_malformed_is_best_effort() {
        // Unclosed tags and stray brackets still produce a usable tree.
        let document = doc("<html><body><p>open <div>nested < broken");
        assert!(document.full_text().contains("open"));
    }

    #[test]
    fn test_full_text_includes_descendants() {
        let document = doc("<body><div>outer <span>inner</span> tail</div></body>");
        let text = document.full_text();
        assert!(text.contains("outer"));
        assert!(text.contains("inner"));
        assert!(text.contains("tail"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("server".to_string(), "nginx".to_string());

        let document = Document::parse(
            "<html></html>",
            Url::parse("https://example.com/").unwrap(),
            200,
            headers,
            None,
        );

        assert_eq!(document.header("Server"), Some("nginx"));
        assert_eq!(document.header("SERVER"), Some("nginx"));
        assert_eq!(document.header("x-missing"), None);
    }

    #[test]
    fn test_encoding_passthrough() {
        let document = Document::parse(
            "<html></html>",
            Url::parse("https://example.com/").unwrap(),
            200,
            HashMap::new(),
            Some("UTF-8".to_string()),
        );
        assert_eq!(document.encoding(), Some("UTF-8"));
    }
}
