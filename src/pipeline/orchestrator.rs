//! Batch orchestration
//!
//! One run goes through these stages in order:
//! - Loading the top stories
//! - Harvesting candidate links from every story tree
//! - Filtering candidates that are not worth fetching
//! - Enriching candidates one at a time
//! - Final deduplication and snapshot assembly

use crate::config::Config;
use crate::enrich::{EnrichError, EnrichedLink, Enricher, HtmlMetadataExtractor, HttpFetcher};
use crate::forum::{ForumApi, HackerNewsClient, Item};
use crate::harvest::{CandidateLink, Harvester};
use crate::output::Snapshot;
use crate::pipeline::{dedup_last_wins, filter_candidates, RunStats};
use crate::TrawlError;
use std::sync::Arc;
use std::time::Instant;
use tracing::Level;

/// Runs the whole harvest, enrich, and dedup pipeline for one batch
pub struct Orchestrator {
    forum: Arc<dyn ForumApi>,
    enricher: Enricher,
    config: Config,
}

impl Orchestrator {
    /// Creates an orchestrator from its collaborators
    pub fn new(forum: Arc<dyn ForumApi>, enricher: Enricher, config: Config) -> Self {
        Self {
            forum,
            enricher,
            config,
        }
    }

    /// Creates an orchestrator backed by the Hacker News API and live HTTP fetching
    ///
    /// # Returns
    ///
    /// * `Ok(Orchestrator)` - Ready to run
    /// * `Err(TrawlError)` - An HTTP client could not be built
    pub fn from_config(config: Config) -> Result<Self, TrawlError> {
        let forum = HackerNewsClient::new(&config.forum)?;
        let fetcher = HttpFetcher::new(&config.fetch)?;
        let enricher = Enricher::new(
            Arc::new(fetcher),
            Arc::new(HtmlMetadataExtractor),
            &config,
        );

        Ok(Self::new(Arc::new(forum), enricher, config))
    }

    /// Runs one batch and returns its snapshot
    ///
    /// Only a failure to load the top stories aborts the run. Item and link failures are
    /// logged and skipped.
    pub async fn run(&self) -> Result<Snapshot, TrawlError> {
        let (snapshot, _) = self.run_with_stats().await?;
        Ok(snapshot)
    }

    /// Runs one batch and returns its snapshot together with the run counters
    pub async fn run_with_stats(&self) -> Result<(Snapshot, RunStats), TrawlError> {
        let start_time = Instant::now();
        let mut stats = RunStats::default();

        let stories = self.forum.top_stories(self.config.forum.story_limit).await?;
        stats.stories = stories.len();
        tracing::info!("Loaded {} top stories", stories.len());

        let candidates = self.harvest(&stories).await;
        stats.harvested = candidates.len();

        let candidates = filter_candidates(
            candidates,
            &self.config.forum.item_url_prefix,
            &self.config.filter.excluded_extensions,
        );
        stats.after_filter = candidates.len();
        tracing::info!(
            "Enriching {} of {} harvested links",
            stats.after_filter,
            stats.harvested
        );

        let enriched = self.enrich_all(&candidates, &mut stats).await;

        let before_drop = enriched.len();
        let enriched: Vec<EnrichedLink> = enriched
            .into_iter()
            .filter(|link| !link.title.is_empty() && !link.url.is_empty())
            .collect();
        stats.dropped_empty = before_drop - enriched.len();

        let links = dedup_last_wins(enriched);
        stats.kept = links.len();

        tracing::info!(
            "Run completed in {:?}: {}",
            start_time.elapsed(),
            stats
        );

        Ok((Snapshot::new(links), stats))
    }

    async fn harvest(&self, stories: &[Item]) -> Vec<CandidateLink> {
        let mut harvester = Harvester::new(self.forum.as_ref(), &self.config.forum.item_url_prefix);

        for story in stories {
            let added = harvester.harvest_story(story).await;
            tracing::debug!("Story {} contributed {} links", story.item_id, added);
        }

        harvester.into_links()
    }

    async fn enrich_all(
        &self,
        candidates: &[CandidateLink],
        stats: &mut RunStats,
    ) -> Vec<EnrichedLink> {
        let start_time = Instant::now();
        let mut enriched = Vec::with_capacity(candidates.len());

        for (index, candidate) in candidates.iter().enumerate() {
            match self.enricher.enrich(candidate).await {
                Ok(link) => enriched.push(link),
                Err(e) => {
                    log_failure(candidate, &e);
                    stats.record_failure(e.reason());
                }
            }

            let processed = index + 1;
            if processed % 10 == 0 {
                let rate = processed as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {}/{} links processed, {} failed, {:.2} links/sec",
                    processed,
                    candidates.len(),
                    stats.total_failures(),
                    rate
                );
            }
        }

        enriched
    }
}

/// Transport failures and timeouts are warnings; pages that answered badly are info
fn failure_level(error: &EnrichError) -> Level {
    match error {
        EnrichError::TimedOut { .. } | EnrichError::Fetch(_) => Level::WARN,
        EnrichError::Status { .. }
        | EnrichError::EmptyBody { .. }
        | EnrichError::InvalidUrl { .. } => Level::INFO,
    }
}

fn log_failure(candidate: &CandidateLink, error: &EnrichError) {
    if failure_level(error) == Level::WARN {
        tracing::warn!("Dropping {} (item {}): {}", candidate.url, candidate.item_id, error);
    } else {
        tracing::info!("Dropping {} (item {}): {}", candidate.url, candidate.item_id, error);
    }
}
