//! URL Utility Functions
//!
//! Resolution of link and media URLs found in the article against the page's
//! base URL, plus base URL discovery from `<link rel="canonical">` and
//! `<meta property="og:url">`.

use dom_query::Selection;
use url::Url;

/// Resolves relative URLs against a page's base URL.
///
/// Resolution never fails: anything that cannot be resolved is returned as
/// it was given.
///
/// # Example
///
/// ```rust
/// use seize::url_utils::UrlResolver;
///
/// let resolver = UrlResolver::new("http://example.com/123/");
/// assert_eq!(resolver.resolve("image.jpg"), "http://example.com/123/image.jpg");
/// assert_eq!(resolver.resolve("/image.jpg"), "http://example.com/image.jpg");
/// assert_eq!(resolver.resolve("#frag"), "#frag");
/// assert_eq!(resolver.resolve("javascript:alert(1)"), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlResolver {
    base: String,
    parsed: Option<Url>,
}

impl UrlResolver {
    /// Create a resolver for `base`. An empty base disables resolution.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let base = base.trim();
        Self {
            base: base.to_string(),
            parsed: Url::parse(base).ok(),
        }
    }

    /// The configured base URL (may be empty).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve `path` against the base URL.
    ///
    /// - no base URL, fragment-only or `http`/`https` paths: unchanged
    /// - `javascript:` paths: empty string
    /// - anything else: RFC 3986 reference resolution, unchanged on failure
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        if self.base.is_empty() || path.starts_with('#') || has_http_scheme(path) {
            return path.to_string();
        }

        if path.starts_with("javascript:") {
            return String::new();
        }

        let Some(base) = &self.parsed else {
            return path.to_string();
        };

        match base.join(path) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => path.to_string(),
        }
    }
}

fn has_http_scheme(path: &str) -> bool {
    path.starts_with("http")
}

/// Discover the page URL declared inside `scope`.
///
/// Looks at `<link rel="canonical">` first, then `<meta property="og:url">`.
/// The first of these elements found decides: if it lacks the URL attribute
/// the result is empty and the other one is not consulted. Returns an empty
/// string when neither is present.
#[must_use]
pub fn page_url(scope: &Selection) -> String {
    let canonical = scope.select(r#"link[rel="canonical"]"#);
    if canonical.exists() {
        return attr_trimmed(&canonical, "href");
    }

    let og_url = scope.select(r#"meta[property="og:url"]"#);
    if og_url.exists() {
        return attr_trimmed(&og_url, "content");
    }

    String::new()
}

fn attr_trimmed(sel: &Selection, name: &str) -> String {
    sel.attr(name).map(|v| v.trim().to_string()).unwrap_or_default()
}
