//! Forum API access
//!
//! The harvester and orchestrator only see the [`ForumApi`] trait. [`HackerNewsClient`]
//! implements it against the public Hacker News item API.

mod client;
mod types;

pub use client::HackerNewsClient;
pub use types::Item;

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by forum API calls
#[derive(Debug, Error)]
pub enum ForumError {
    /// The item does not exist or the API returned nothing for it
    #[error("Invalid item id: {0}")]
    InvalidItemId(u64),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Read access to a forum's stories and comments
#[async_trait]
pub trait ForumApi: Send + Sync {
    /// Returns up to `limit` top stories in ranking order
    async fn top_stories(&self, limit: usize) -> Result<Vec<Item>, ForumError>;

    /// Fetches a single item
    async fn get_item(&self, item_id: u64) -> Result<Item, ForumError>;

    /// Fetches several items, preserving order and skipping any that fail
    async fn get_items_by_ids(&self, item_ids: &[u64]) -> Vec<Item> {
        let mut items = Vec::with_capacity(item_ids.len());
        for &item_id in item_ids {
            match self.get_item(item_id).await {
                Ok(item) => items.push(item),
                Err(e) => tracing::debug!("Skipping item {}: {}", item_id, e),
            }
        }
        items
    }
}
