use crate::classify::classify;
use crate::config::Config;
use crate::enrich::{EnrichError, EnrichedLink, MetadataExtractor, PageFetcher, PageMetadata};
use crate::harvest::CandidateLink;
use crate::url::normalize_url;
use std::sync::Arc;
use std::time::Duration;

/// Appended to descriptions cut at the length limit
pub const ELLIPSIS: &str = "...";

/// Turns candidate links into enriched links
///
/// Each call is independent: a failure or timeout affects only the link being enriched.
pub struct Enricher {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn MetadataExtractor>,
    enrich_timeout: Duration,
    extract_timeout: Duration,
    description_limit: usize,
}

impl Enricher {
    /// Creates an enricher with timeouts and limits taken from the configuration
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn MetadataExtractor>,
        config: &Config,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            enrich_timeout: Duration::from_secs(config.fetch.enrich_timeout),
            extract_timeout: Duration::from_secs(config.fetch.extract_timeout),
            description_limit: config.output.description_limit,
        }
    }

    /// Overrides the outer (whole link) and inner (extraction) timeouts
    pub fn with_timeouts(mut self, enrich_timeout: Duration, extract_timeout: Duration) -> Self {
        self.enrich_timeout = enrich_timeout;
        self.extract_timeout = extract_timeout;
        self
    }

    /// Fetches, classifies, and describes one candidate link
    ///
    /// # Steps
    ///
    /// 1. Fetch the URL; transport errors, non-200 statuses, and empty bodies fail the link
    /// 2. Canonicalize the final URL after redirects and classify it
    /// 3. Extract title and description under the extraction timeout; on timeout or error
    ///    both are left empty and the link still succeeds
    /// 4. Truncate the description to the configured limit
    ///
    /// The whole sequence runs under the outer enrichment timeout, which fails the link.
    pub async fn enrich(&self, candidate: &CandidateLink) -> Result<EnrichedLink, EnrichError> {
        match tokio::time::timeout(self.enrich_timeout, self.enrich_within_deadline(candidate))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(EnrichError::TimedOut {
                url: candidate.url.clone(),
                after: self.enrich_timeout,
            }),
        }
    }

    async fn enrich_within_deadline(
        &self,
        candidate: &CandidateLink,
    ) -> Result<EnrichedLink, EnrichError> {
        let page = self.fetcher.fetch(&candidate.url).await?;

        if page.status_code != 200 {
            return Err(EnrichError::Status {
                url: candidate.url.clone(),
                status: page.status_code,
            });
        }

        if page.body.is_empty() {
            return Err(EnrichError::EmptyBody {
                url: candidate.url.clone(),
            });
        }

        let final_url = normalize_url(&page.final_url).map_err(|source| EnrichError::InvalidUrl {
            url: page.final_url.clone(),
            source,
        })?;
        let category = classify(&final_url);
        let url = final_url.to_string();

        if url != candidate.url {
            tracing::debug!("{} resolved to {}", candidate.url, url);
        }

        let metadata = self.extract_metadata(&url, page.body).await;

        Ok(EnrichedLink {
            item_id: candidate.item_id,
            item_url: candidate.item_url.clone(),
            root_id: candidate.root_id,
            original_title: candidate.original_title.clone(),
            title: metadata.title,
            description: truncate_description(&metadata.description, self.description_limit),
            url,
            hostname: final_url.hostname().to_string(),
            category,
        })
    }

    /// Runs the extractor on the blocking pool, bounded by the extraction timeout
    ///
    /// A timed-out extraction is abandoned; its thread finishes on its own and the result
    /// is dropped.
    async fn extract_metadata(&self, url: &str, content: String) -> PageMetadata {
        tracing::debug!("Getting metadata for {}", url);

        let extractor = Arc::clone(&self.extractor);
        let task_url = url.to_string();
        let task = tokio::task::spawn_blocking(move || extractor.extract(&task_url, &content));

        match tokio::time::timeout(self.extract_timeout, task).await {
            Ok(Ok(Ok(metadata))) => metadata,
            Ok(Ok(Err(e))) => {
                tracing::warn!("Could not get metadata for {}: {}", url, e);
                PageMetadata::default()
            }
            Ok(Err(e)) => {
                tracing::warn!("Metadata task for {} failed: {}", url, e);
                PageMetadata::default()
            }
            Err(_) => {
                tracing::warn!(
                    "Metadata extraction for {} timed out after {:?}",
                    url,
                    self.extract_timeout
                );
                PageMetadata::default()
            }
        }
    }
}

/// Cuts a description to `limit` characters, marking the cut with [`ELLIPSIS`]
///
/// # Examples
///
/// ```
/// use thread_trawl::enrich::truncate_description;
///
/// assert_eq!(truncate_description("short", 450), "short");
/// assert_eq!(truncate_description("abcdef", 3), "abc...");
/// ```
pub fn truncate_description(description: &str, limit: usize) -> String {
    match description.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &description[..cut], ELLIPSIS),
        None => description.to_string(),
    }
}
