//! Pre-enrichment candidate filtering

use crate::harvest::CandidateLink;
use crate::url::url_path;

/// Drops candidates that are not worth fetching
///
/// A candidate is dropped if its URL is empty, points back at the forum's own item pages,
/// or has a path ending in one of `excluded_extensions`. Order is preserved.
pub fn filter_candidates(
    links: Vec<CandidateLink>,
    item_url_prefix: &str,
    excluded_extensions: &[String],
) -> Vec<CandidateLink> {
    links
        .into_iter()
        .filter(|link| {
            let keep = is_fetchable(&link.url, item_url_prefix, excluded_extensions);
            if !keep {
                tracing::debug!("Filtered out {} from item {}", link.url, link.item_id);
            }
            keep
        })
        .collect()
}

/// Returns true if a URL should go on to enrichment
///
/// Extension matching is case-sensitive. When the URL does not parse, the raw string's
/// ending is checked instead of the path.
pub fn is_fetchable(url: &str, item_url_prefix: &str, excluded_extensions: &[String]) -> bool {
    if url.is_empty() || url.starts_with(item_url_prefix) {
        return false;
    }

    let path = url_path(url).unwrap_or_else(|| url.to_string());
    !excluded_extensions
        .iter()
        .any(|extension| path.ends_with(extension.as_str()))
}
