//! Link enrichment
//!
//! This module turns a candidate link into an [`EnrichedLink`]:
//! - HTTP fetching of the linked page
//! - Classification of the final URL after redirects
//! - Title/description extraction under a timeout

mod enricher;
mod fetcher;
mod metadata;

pub use enricher::{truncate_description, Enricher, ELLIPSIS};
pub use fetcher::{build_http_client, FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use metadata::{ExtractError, HtmlMetadataExtractor, MetadataExtractor, PageMetadata};

use crate::classify::Category;
use crate::UrlError;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// A candidate link with page metadata and a category
///
/// Serialized field order is the snapshot's link shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedLink {
    pub item_id: u64,
    pub item_url: String,
    pub root_id: Option<u64>,
    pub original_title: Option<String>,
    pub title: String,
    pub description: String,

    /// Canonical URL after redirects
    pub url: String,
    pub hostname: String,
    pub category: Category,
}

/// Why a link produced no enriched result
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Empty body from {url}")]
    EmptyBody { url: String },

    #[error("Unusable final URL {url}: {source}")]
    InvalidUrl { url: String, source: UrlError },

    #[error("Enrichment of {url} timed out after {after:?}")]
    TimedOut { url: String, after: Duration },
}

impl EnrichError {
    /// Short label used when counting failures
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Status { .. } => "status",
            Self::EmptyBody { .. } => "empty_body",
            Self::InvalidUrl { .. } => "invalid_url",
            Self::TimedOut { .. } => "timeout",
        }
    }
}
