//! Hacker News item API client
//!
//! Talks to the Firebase-backed JSON API:
//! - `GET {base}/topstories.json` returns ranked story ids
//! - `GET {base}/item/{id}.json` returns one item, or `null` if it does not exist

use crate::config::ForumConfig;
use crate::forum::{ForumApi, ForumError, Item};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Forum API client for Hacker News
#[derive(Debug, Clone)]
pub struct HackerNewsClient {
    client: Client,
    api_base: String,
}

impl HackerNewsClient {
    /// Builds a client from the forum configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thread_trawl::config::ForumConfig;
    /// use thread_trawl::forum::HackerNewsClient;
    ///
    /// let client = HackerNewsClient::new(&ForumConfig::default()).unwrap();
    /// ```
    pub fn new(config: &ForumConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, ForumError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ForumError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForumError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| ForumError::Http {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ForumApi for HackerNewsClient {
    async fn top_stories(&self, limit: usize) -> Result<Vec<Item>, ForumError> {
        let url = format!("{}/topstories.json", self.api_base);
        let ids: Vec<u64> = self.get_json(&url).await?;
        tracing::debug!("Top stories listing returned {} ids", ids.len());

        let ids: Vec<u64> = ids.into_iter().take(limit).collect();
        Ok(self.get_items_by_ids(&ids).await)
    }

    async fn get_item(&self, item_id: u64) -> Result<Item, ForumError> {
        let url = format!("{}/item/{}.json", self.api_base, item_id);

        match self.get_json::<Option<Item>>(&url).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(ForumError::InvalidItemId(item_id)),
            Err(ForumError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(ForumError::InvalidItemId(item_id))
            }
            Err(e) => Err(e),
        }
    }
}
