//! Thread-Trawl: a link harvester for forum discussion trees
//!
//! This crate walks the comment trees of a forum's top stories, collects every outbound
//! link, classifies each one by content type and enriches it with page metadata. The result
//! is a deduplicated, timestamped feed snapshot.

pub mod classify;
pub mod config;
pub mod enrich;
pub mod forum;
pub mod harvest;
pub mod output;
pub mod pipeline;
pub mod url;

use thiserror::Error;

/// Main error type for Thread-Trawl operations
///
/// Only run-level failures use this type. Per-story and per-link failures are handled
/// where they happen and never reach the caller.
#[derive(Debug, Error)]
pub enum TrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Forum API error: {0}")]
    Forum(#[from] forum::ForumError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),
}

/// Result type alias for Thread-Trawl operations
pub type Result<T> = std::result::Result<T, TrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use classify::{classify, Category};
pub use config::Config;
pub use harvest::{CandidateLink, Harvester};
pub use enrich::{EnrichedLink, Enricher};
pub use output::Snapshot;
pub use pipeline::Orchestrator;
pub use url::{normalize_url, NormalizedUrl};
