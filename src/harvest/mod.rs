//! Link harvesting from discussion trees
//!
//! This module contains:
//! - Candidate link extraction from comment HTML
//! - Depth-first traversal of a story's comment tree
//! - Batch-wide deduplication of harvested URLs

mod comment;
mod harvester;

pub use comment::{comment_links, extract_hrefs};
pub use harvester::Harvester;

use serde::Serialize;

/// A URL mentioned in a story or comment, not yet fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateLink {
    /// The story or comment that mentioned the URL
    pub item_id: u64,

    /// Forum page of that item
    pub item_url: String,

    /// The story the comment belongs to; `None` for a story's own link
    pub root_id: Option<u64>,

    /// Story title; only set for a story's own link
    pub original_title: Option<String>,

    /// The URL as written (never empty)
    pub url: String,
}
