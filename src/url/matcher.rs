/// Checks if a hostname ends with the given suffix
///
/// This is a literal suffix test, not a label-boundary test: `"notwikipedia.org"` ends with
/// `"wikipedia.org"`. Classification rules depend on exactly this behavior, so no public
/// suffix list is consulted.
///
/// # Examples
///
/// ```
/// use thread_trawl::url::host_has_suffix;
///
/// assert!(host_has_suffix("en.wikipedia.org", "wikipedia.org"));
/// assert!(host_has_suffix("wikipedia.org", "wikipedia.org"));
/// assert!(!host_has_suffix("wikipedia.org.evil.com", "wikipedia.org"));
/// ```
pub fn host_has_suffix(hostname: &str, suffix: &str) -> bool {
    hostname.ends_with(suffix)
}

/// Checks if a hostname ends with any of the given suffixes
pub fn host_has_any_suffix(hostname: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|suffix| host_has_suffix(hostname, suffix))
}

/// Checks if `infix` occurs in the hostname with at least one character after it
///
/// Matches `*.amazon.*` style patterns when called with `"amazon."`: `"www.amazon.co.uk"`
/// and `"amazon.com"` qualify, while `"amazon."` has nothing after the dot and does not.
/// Like [`host_has_suffix`] this is a literal substring test.
///
/// # Examples
///
/// ```
/// use thread_trawl::url::host_contains_infix;
///
/// assert!(host_contains_infix("smile.amazon.com", "amazon."));
/// assert!(host_contains_infix("amazon.de", "amazon."));
/// assert!(!host_contains_infix("amazonaws.com", "amazon."));
/// ```
pub fn host_contains_infix(hostname: &str, infix: &str) -> bool {
    hostname
        .match_indices(infix)
        .any(|(index, _)| hostname.len() > index + infix.len())
}
