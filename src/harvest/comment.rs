//! Link extraction from comment HTML
//!
//! Comment bodies are HTML fragments. Every `<a>` element with a non-empty `href` counts,
//! with the href taken verbatim (after entity decoding by the parser). Nothing is resolved
//! against a base URL; forum comments only carry absolute links.

use crate::forum::Item;
use scraper::{Html, Selector};

/// Returns the links mentioned in a comment, in document order
///
/// # Skipped Comments
///
/// - comments marked dead
/// - comments with no text or empty text
/// - comments whose text is a lone `.` (an artifact some sanitizers produce)
///
/// # Example
///
/// ```
/// use thread_trawl::forum::Item;
/// use thread_trawl::harvest::comment_links;
///
/// let comment = Item::comment(1, r#"See <a href="https://example.com/post">this</a>"#);
/// assert_eq!(comment_links(&comment), vec!["https://example.com/post".to_string()]);
/// ```
pub fn comment_links(comment: &Item) -> Vec<String> {
    if comment.dead {
        return Vec::new();
    }

    match comment.text.as_deref() {
        Some(text) if !text.is_empty() && text != "." => extract_hrefs(text),
        _ => Vec::new(),
    }
}

/// Extracts every non-empty anchor `href` from an HTML fragment
///
/// Malformed markup never fails; the parser recovers what anchors it can.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);

    let Ok(anchor_selector) = Selector::parse("a") else {
        return Vec::new();
    };

    fragment
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}
