//! Image extraction
//!
//! Same discipline as the link extractor, applied to `img[src]`: absolute
//! source URLs via base resolution, alt text with a default, and stable
//! deduplication of exact rows.

use crate::document::Document;
use crate::url::resolve_href;
use scraper::Selector;
use serde::Serialize;
use std::collections::HashSet;

/// Alt text recorded for images that declare none
const NO_ALT_TEXT: &str = "No Alt Text";

/// One extracted image reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Image {
    /// The `alt` attribute, or "No Alt Text"
    pub alt: String,

    /// Absolute source URL, resolved against the page
    pub url: String,
}

/// Extracts all image references from a document
pub fn extract_images(document: &Document) -> Vec<Image> {
    let mut images = Vec::new();

    if let Ok(selector) = Selector::parse("img[src]") {
        for element in document.tree().select(&selector) {
            let Some(src) = element.value().attr("src") else {
                continue;
            };

            let Some(resolved) = resolve_href(document.url(), src) else {
                continue;
            };

            let alt = element
                .value()
                .attr("alt")
                .unwrap_or(NO_ALT_TEXT)
                .to_string();

            images.push(Image {
                alt,
                url: resolved.to_string(),
            });
        }
    }

    dedup_stable(images)
}

/// Drops exact duplicate rows, keeping the first occurrence of each
fn dedup_stable(images: Vec<Image>) -> Vec<Image> {
    let mut seen = HashSet::new();
    images
        .into_iter()
        .filter(|image| seen.insert(image.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use url::Url;

    fn doc(body: &str) -> Document {
        Document::parse(
            body,
            Url::parse("https://example.com/page").unwrap(),
            200,
            HashMap::new(),
            None,
        )
    }

    #[test]
    fn test_relative_src_is_resolved() {
        let images = extract_images(&doc(r#"<img src="/logo.png" alt="Logo">"#));
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "https://example.com/logo.png");
        assert_eq!(images[0].alt, "Logo");
    }

    #[test]
    fn test_missing_alt_gets_default() {
        let images = extract_images(&doc(r#"<img src="pic.jpg">"#));
        assert_eq!(images[0].alt, "No Alt Text");
    }

    #[test]
    fn test_empty_alt_is_kept_verbatim() {
        let images = extract_images(&doc(r#"<img src="pic.jpg" alt="">"#));
        assert_eq!(images[0].alt, "");
    }

    #[test]
    fn test_images_without_src_are_skipped() {
        let images = extract_images(&doc(r#"<img alt="nothing"><img src="a.png">"#));
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "https://example.com/a.png");
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let images = extract_images(&doc(
            r#"<img src="a.png" alt="A"><img src="a.png" alt="A"><img src="a.png" alt="B">"#,
        ));
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].alt, "A");
        assert_eq!(images[1].alt, "B");
    }

    #[test]
    fn test_no_images_yields_empty() {
        assert!(extract_images(&doc("<p>plain text</p>")).is_empty());
    }

    #[test]
    fn test_absolute_src_passes_through() {
        let images = extract_images(&doc(r#"<img src="https://cdn.example.net/x.webp">"#));
        assert_eq!(images[0].url, "https://cdn.example.net/x.webp");
    }
}
