//! Link classification
//!
//! A URL is classified by walking [`Category::ALL`] in priority order and returning the
//! first category whose predicate matches. `Uncategorized` is last and matches everything,
//! so classification is total.

mod category;

pub use category::{Category, NEWS_DOMAINS};

use crate::url::NormalizedUrl;

/// Classifies a normalized URL
///
/// # Examples
///
/// ```
/// use thread_trawl::classify::{classify, Category};
/// use thread_trawl::url::normalize_url;
///
/// let url = normalize_url("https://github.com/golang/go").unwrap();
/// assert_eq!(classify(&url), Category::Repository);
///
/// let url = normalize_url("https://example.com/").unwrap();
/// assert_eq!(classify(&url), Category::Site);
/// ```
pub fn classify(url: &NormalizedUrl) -> Category {
    Category::ALL
        .into_iter()
        .find(|category| category.resolves(url))
        .unwrap_or(Category::Uncategorized)
}

/// Category names in resolver order, as listed in the snapshot
pub fn category_names() -> Vec<&'static str> {
    Category::ALL.iter().map(Category::as_str).collect()
}
