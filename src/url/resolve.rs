use url::Url;

/// Resolves a reference from the page against the page's own URL
///
/// Standard relative-reference resolution: path-relative, scheme-relative,
/// fragment-only and query-only references all resolve against the base.
/// Absolute references (including non-HTTP ones like `mailto:`) pass through
/// as themselves. References the joiner rejects are dropped with a debug log
/// so the extractors stay total.
///
/// # Arguments
///
/// * `base` - The page URL
/// * `reference` - The raw `href`/`src` attribute value
///
/// # Returns
///
/// * `Some(Url)` - The absolute form of the reference
/// * `None` - The reference could not be resolved
///
/// # Examples
///
/// ```
/// use pagelens::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/a/page").unwrap();
/// let resolved = resolve_href(&base, "/b").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/b");
/// ```
pub fn resolve_href(base: &Url, reference: &str) -> Option<Url> {
    let reference = reference.trim();

    match base.join(reference) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!("Dropping unresolvable reference {:?}: {}", reference, e);
            None
        }
    }
}

/// Compares a resolved URL's host against the page's host
///
/// The `url` crate normalizes hosts to lowercase at parse time; the
/// comparison here is exact equality on those normalized strings. A URL
/// without a host (`mailto:`, `tel:`) never matches.
pub fn same_host(page: &Url, other: &Url) -> bool {
    match (page.host_str(), other.host_str()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/a/page").unwrap()
    }

    #[test]
    fn test_resolve_path_relative() {
        let url = resolve_href(&base(), "other").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a/other");
    }

    #[test]
    fn test_resolve_root_relative() {
        let url = resolve_href(&base(), "/b").unwrap();
        assert_eq!(url.as_str(), "https://example.com/b");
    }

    #[test]
    fn test_resolve_scheme_relative() {
        let url = resolve_href(&base(), "//other.com/x").unwrap();
        assert_eq!(url.as_str(), "https://other.com/x");
    }

    #[test]
    fn test_resolve_fragment_only() {
        let url = resolve_href(&base(), "#section").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a/page#section");
    }

    #[test]
    fn test_resolve_query_only() {
        let url = resolve_href(&base(), "?q=1").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a/page?q=1");
    }

    #[test]
    fn test_resolve_absolute_passes_through() {
        let url = resolve_href(&base(), "https://other.com/x").unwrap();
        assert_eq!(url.as_str(), "https://other.com/x");
    }

    #[test]
    fn test_resolve_dot_segments() {
        let url = resolve_href(&base(), "../up").unwrap();
        assert_eq!(url.as_str(), "https://example.com/up");
    }

    #[test]
    fn test_resolve_mailto_keeps_scheme() {
        let url = resolve_href(&base(), "mailto:someone@example.com").unwrap();
        assert_eq!(url.scheme(), "mailto");
        assert!(url.host_str().is_none());
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let url = resolve_href(&base(), "  /b  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/b");
    }

    #[test]
    fn test_same_host_matches() {
        let other = Url::parse("https://example.com/elsewhere").unwrap();
        assert!(same_host(&base(), &other));
    }

    #[test]
    fn test_same_host_rejects_other_domain() {
        let other = Url::parse("https://other.com/x").unwrap();
        assert!(!same_host(&base(), &other));
    }

    #[test]
    fn test_same_host_rejects_subdomain() {
        let other = Url::parse("https://sub.example.com/x").unwrap();
        assert!(!same_host(&base(), &other));
    }

    #[test]
    fn test_same_host_rejects_hostless_url() {
        let other = Url::parse("mailto:someone@example.com").unwrap();
        assert!(!same_host(&base(), &other));
    }

    #[test]
    fn test_host_comparison_ignores_source_casing() {
        // The parser lowercases hosts, so differently-cased inputs compare equal.
        let shouty = Url::parse("https://EXAMPLE.com/x").unwrap();
        assert!(same_host(&base(), &shouty));
    }
}
