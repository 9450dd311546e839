use url::Url;

/// Normalizes a URL into the comparison key used by the visited registry
///
/// # Normalization Steps
///
/// 1. Parse the URL; if parsing fails, return the raw string unchanged
/// 2. Clear the fragment (everything after #)
/// 3. Clear the query string (everything after ?)
/// 4. Re-serialize
///
/// Scheme, host, port, and path are preserved, so URLs differing in any of
/// those remain distinct keys. Clearing the query is intentionally lossy:
/// two resources differing only in query parameters collapse to one node.
///
/// # Examples
///
/// ```
/// use fathom::url::normalize_url;
///
/// let key = normalize_url("https://example.com/page?id=7#section");
/// assert_eq!(key, "https://example.com/page");
/// ```
pub fn normalize_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.set_query(None);
            url.into()
        }
        // Fail-soft: a malformed URL is its own key
        Err(_) => raw.to_string(),
    }
}
