//! Discussion tree traversal
//!
//! Comment trees can be thousands of nodes deep in busy threads, so the walk uses an
//! explicit stack instead of recursion. Children are pushed in reverse so they pop in API
//! order, which gives a depth-first pre-order visit.

use crate::forum::{ForumApi, ForumError, Item};
use crate::harvest::comment::comment_links;
use crate::harvest::CandidateLink;
use std::collections::HashSet;

/// Collects candidate links from story trees into one deduplicated sequence
///
/// A single harvester is used for the whole batch: a URL seen in any earlier story or
/// comment is not added again.
pub struct Harvester<'a> {
    forum: &'a dyn ForumApi,
    item_url_prefix: String,
    links: Vec<CandidateLink>,
    seen: HashSet<String>,
}

impl<'a> Harvester<'a> {
    /// Creates a harvester that reads items from `forum`
    ///
    /// `item_url_prefix` is the forum's item page prefix, e.g.
    /// `"https://news.ycombinator.com/item"`.
    pub fn new(forum: &'a dyn ForumApi, item_url_prefix: &str) -> Self {
        Self {
            forum,
            item_url_prefix: item_url_prefix.to_string(),
            links: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Forum page URL for an item
    pub fn item_url(&self, item_id: u64) -> String {
        format!("{}?id={}", self.item_url_prefix, item_id)
    }

    /// Harvests a story and all of its descendant comments
    ///
    /// The story's own URL comes first, followed by comment links in pre-order. Items that
    /// fail to load are skipped together with their subtrees.
    ///
    /// # Returns
    ///
    /// The number of new links added by this story
    pub async fn harvest_story(&mut self, story: &Item) -> usize {
        let before = self.links.len();

        if let Some(url) = story.url.as_deref().filter(|url| !url.is_empty()) {
            self.push(CandidateLink {
                item_id: story.item_id,
                item_url: self.item_url(story.item_id),
                root_id: None,
                original_title: story.title.clone(),
                url: url.to_string(),
            });
        }

        let mut stack: Vec<u64> = story.kids.iter().rev().copied().collect();
        let mut visited: HashSet<u64> = HashSet::from([story.item_id]);
        let mut comments = 0usize;

        while let Some(item_id) = stack.pop() {
            if !visited.insert(item_id) {
                tracing::debug!("Item {} already visited in story {}", item_id, story.item_id);
                continue;
            }

            let comment = match self.forum.get_item(item_id).await {
                Ok(item) => item,
                Err(ForumError::InvalidItemId(id)) => {
                    tracing::debug!("Skipping invalid item {} and its replies", id);
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Could not load item {}: {}", item_id, e);
                    continue;
                }
            };
            comments += 1;

            for url in comment_links(&comment) {
                self.push(CandidateLink {
                    item_id: comment.item_id,
                    item_url: self.item_url(comment.item_id),
                    root_id: Some(story.item_id),
                    original_title: None,
                    url,
                });
            }

            stack.extend(comment.kids.iter().rev());
        }

        let added = self.links.len() - before;
        tracing::debug!(
            "Story {}: {} comments visited, {} new links",
            story.item_id,
            comments,
            added
        );
        added
    }

    /// Links harvested so far, in discovery order
    pub fn links(&self) -> &[CandidateLink] {
        &self.links
    }

    /// Consumes the harvester, returning the harvested links
    pub fn into_links(self) -> Vec<CandidateLink> {
        self.links
    }

    /// Adds a link unless its URL was already harvested; first occurrence wins
    fn push(&mut self, link: CandidateLink) -> bool {
        if !self.seen.insert(link.url.clone()) {
            return false;
        }
        self.links.push(link);
        true
    }
}
