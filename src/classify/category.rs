use crate::url::{host_contains_infix, host_has_any_suffix, host_has_suffix, NormalizedUrl};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Hosts whose two-segment paths are `<owner>/<repo>`
const REPOSITORY_HOSTS: &[&str] = &["github.com", "gitlab.com", "bitbucket.org"];

/// Major news outlets, matched as literal hostname suffixes
pub const NEWS_DOMAINS: &[&str] = &[
    "techcrunch.com",
    "nytimes.com",
    "bloomberg.com",
    "theverge.com",
    "theguardian.com",
    "news.yahoo.com",
    "washingtonpost.com",
    "news.google.com",
    "huffingtonpost.com",
    "cnn.com",
    "foxnews.com",
    "nbcnews.com",
    "dailymail.co.uk",
    "wsj.com",
    "abcnews.go.com",
    "bbc.co.uk",
    "usatoday.com",
    "latimes.com",
    "wired.com",
    "gizmodo.com",
    "mashable.com",
    "businessinsider.com",
    "macrumors.com",
    "engadget.com",
    "newyorker.com",
];

// /<org>/<repo>
static REPOSITORY_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[^/]+/[^/]+/?$").expect("valid regex"));

// /wiki/<article>
static WIKI_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/wiki/[^/]+/?$").expect("valid regex"));

static VIMEO_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/\d+$").expect("valid regex"));

static TWEET_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[^/]+/status/\d+/?$").expect("valid regex"));

// /r/<subreddit>
static SUBREDDIT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/r/[^/]+/?$").expect("valid regex"));

// /r/<subreddit>/comments/<id>/<slug>
static REDDIT_POST_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/r/[^/]+/comments/[^/]+/[^/]+/?$").expect("valid regex")
});

/// Content category of a link
///
/// Variants are declared in resolver priority order. [`Category::ALL`] lists them in the
/// same order and the classifier returns the first one whose predicate matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A bare domain (home page)
    Site,
    /// A source repository root on a code host
    Repository,
    /// A Wikipedia article
    WikiArticle,
    /// Anything on an Amazon storefront
    AmazonItem,
    /// A YouTube watch page or a Vimeo video
    Video,
    /// A single tweet
    Tweet,
    /// A subreddit front page
    Subreddit,
    /// A Reddit thread
    RedditPost,
    /// An article on a major news site
    News,
    /// Fallback; matches everything
    Uncategorized,
}

impl Category {
    /// All categories in resolver priority order; `Uncategorized` must stay last
    pub const ALL: [Category; 10] = [
        Category::Site,
        Category::Repository,
        Category::WikiArticle,
        Category::AmazonItem,
        Category::Video,
        Category::Tweet,
        Category::Subreddit,
        Category::RedditPost,
        Category::News,
        Category::Uncategorized,
    ];

    /// The category name as written to the snapshot
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Repository => "repository",
            Self::WikiArticle => "wiki_article",
            Self::AmazonItem => "amazon_item",
            Self::Video => "video",
            Self::Tweet => "tweet",
            Self::Subreddit => "subreddit",
            Self::RedditPost => "reddit_post",
            Self::News => "news",
            Self::Uncategorized => "uncategorized",
        }
    }

    /// Returns true if this category's predicate matches the URL
    pub fn resolves(&self, url: &NormalizedUrl) -> bool {
        let host = url.hostname();
        let path = url.path();

        match self {
            Self::Site => url.is_bare(),
            Self::Repository => REPOSITORY_HOSTS.contains(&host) && REPOSITORY_PATH.is_match(path),
            Self::WikiArticle => host_has_suffix(host, "wikipedia.org") && WIKI_PATH.is_match(path),
            Self::AmazonItem => host_contains_infix(host, "amazon."),
            Self::Video => {
                (host_has_suffix(host, "youtube.com") && path.starts_with("/watch"))
                    || (host_has_suffix(host, "vimeo.com") && VIMEO_PATH.is_match(path))
            }
            Self::Tweet => host_has_suffix(host, "twitter.com") && TWEET_PATH.is_match(path),
            Self::Subreddit => host_has_suffix(host, "reddit.com") && SUBREDDIT_PATH.is_match(path),
            Self::RedditPost => {
                host_has_suffix(host, "reddit.com") && REDDIT_POST_PATH.is_match(path)
            }
            Self::News => host_has_any_suffix(host, NEWS_DOMAINS),
            Self::Uncategorized => true,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
