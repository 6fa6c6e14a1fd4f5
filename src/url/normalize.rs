use crate::UrlError;
use std::fmt;
use url::{Position, Url};

/// A parsed URL split into the parts the classifier matches on
///
/// The path is canonicalized: a bare `/` with no query or fragment is stored as an empty
/// path, so `https://example.com/` and `https://example.com` compare and classify the same.
/// Empty query and fragment components (a trailing `?` or `#`) are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    url: Url,
    hostname: String,
    path: String,
    query: String,
    fragment: String,
}

impl NormalizedUrl {
    /// Lowercase host, or an empty string when the URL has none
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Canonical path; empty for a bare domain
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// True when path, query, and fragment are all empty (a home page)
    pub fn is_bare(&self) -> bool {
        self.path.is_empty() && self.query.is_empty() && self.fragment.is_empty()
    }

    /// The underlying parsed URL
    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for NormalizedUrl {
    /// Renders the canonical form; a bare domain has no trailing slash
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.url[..Position::BeforePath])
        } else {
            f.write_str(self.url.as_str())
        }
    }
}

/// Parses and canonicalizes a URL for classification
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject schemes other than HTTP and HTTPS
/// 3. Drop an empty query string (trailing `?`) and an empty fragment (trailing `#`)
/// 4. If the path is exactly `/` and there is no query or fragment, the path becomes empty
///
/// The host is lowercased by the URL parser. Path, query, and fragment are kept exactly as
/// received; matching on them is case-sensitive.
///
/// # Examples
///
/// ```
/// use thread_trawl::url::normalize_url;
///
/// let url = normalize_url("https://example.com/").unwrap();
/// assert_eq!(url.path(), "");
/// assert_eq!(url.to_string(), "https://example.com");
///
/// let url = normalize_url("https://GitHub.com/rust-lang/rust/").unwrap();
/// assert_eq!(url.hostname(), "github.com");
/// assert_eq!(url.path(), "/rust-lang/rust/");
/// ```
pub fn normalize_url(url_str: &str) -> Result<NormalizedUrl, UrlError> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.query() == Some("") {
        url.set_query(None);
    }
    if url.fragment() == Some("") {
        url.set_fragment(None);
    }

    let hostname = url.host_str().map(str::to_lowercase).unwrap_or_default();
    let query = url.query().unwrap_or_default().to_string();
    let fragment = url.fragment().unwrap_or_default().to_string();

    let path = if url.path() == "/" && query.is_empty() && fragment.is_empty() {
        String::new()
    } else {
        url.path().to_string()
    };

    Ok(NormalizedUrl {
        url,
        hostname,
        path,
        query,
        fragment,
    })
}

/// Returns the path component of a raw URL string, if it parses
pub fn url_path(url_str: &str) -> Option<String> {
    Url::parse(url_str).ok().map(|url| url.path().to_string())
}
