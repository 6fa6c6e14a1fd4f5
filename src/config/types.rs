use serde::Deserialize;

/// Main configuration structure for Thread-Trawl
///
/// Every section is optional in the TOML file; missing sections and keys fall back to
/// the values in the `Default` implementations below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub forum: ForumConfig,
    pub fetch: FetchConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

/// Forum API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ForumConfig {
    /// Base URL of the item API (e.g. "https://hacker-news.firebaseio.com/v0")
    pub api_base: String,

    /// Prefix of the forum's own item pages; links starting with it are self-referential
    pub item_url_prefix: String,

    /// Number of top stories to harvest per run
    pub story_limit: usize,

    /// Timeout for a single forum API call (seconds)
    pub request_timeout: u64,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            api_base: "https://hacker-news.firebaseio.com/v0".to_string(),
            item_url_prefix: "https://news.ycombinator.com/item".to_string(),
            story_limit: 30,
            request_timeout: 10,
        }
    }
}

/// Page fetch and enrichment configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FetchConfig {
    /// User agent sent with page fetches
    pub user_agent: String,

    /// Connect/read timeout for a page fetch (seconds)
    pub request_timeout: u64,

    /// Hard bound on the whole enrichment of one URL (seconds)
    pub enrich_timeout: u64,

    /// Hard bound on metadata extraction for one page (seconds)
    pub extract_timeout: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            request_timeout: 6,
            enrich_timeout: 15,
            extract_timeout: 15,
        }
    }
}

/// Candidate link filtering configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FilterConfig {
    /// Path suffixes that are never fetched (e.g. ".pdf")
    pub excluded_extensions: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_extensions: vec![".pdf".to_string(), ".mp3".to_string()],
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Maximum description length in characters before truncation
    pub description_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            description_limit: 450,
        }
    }
}
