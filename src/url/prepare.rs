use crate::UrlError;
use url::Url;

/// Prepends `https://` when the input lacks an HTTP scheme
///
/// Callers often type bare hosts (`example.com`) or host/path fragments;
/// those are upgraded to HTTPS. Inputs that already carry `http://` or
/// `https://` pass through unchanged.
///
/// # Examples
///
/// ```
/// use pagelens::url::ensure_scheme;
///
/// assert_eq!(ensure_scheme("example.com"), "https://example.com");
/// assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
/// ```
pub fn ensure_scheme(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Parses caller input into the page URL
///
/// Applies [`ensure_scheme`] first, then requires the result to parse and to
/// carry a host. The returned URL is the base for reference resolution and
/// the comparison point for Internal/External link classification.
///
/// # Arguments
///
/// * `input` - The URL as typed by the caller, scheme optional
///
/// # Returns
///
/// * `Ok(Url)` - The prepared page URL
/// * `Err(UrlError)` - The input does not describe a fetchable page
pub fn prepare_url(input: &str) -> Result<Url, UrlError> {
    let with_scheme = ensure_scheme(input);

    let url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
