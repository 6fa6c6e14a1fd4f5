//! Page title and description extraction
//!
//! Looks for the same tags link-preview services use, most specific first:
//!
//! | Field | Sources, in order |
//! |-------|-------------------|
//! | title | `og:title`, `twitter:title`, `<title>`, first `<h1>` |
//! | description | `og:description`, `twitter:description`, `meta name=description`, first non-empty `<p>` |

use scraper::{Html, Selector};
use thiserror::Error;

/// Title and description of a page; either may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

/// Metadata extraction failures
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Document for {url} is empty")]
    EmptyDocument { url: String },

    #[error("Extraction failed for {url}: {message}")]
    Failed { url: String, message: String },
}

/// Extracts metadata from fetched page content
///
/// Extraction is synchronous and may be slow on pathological documents; callers bound it
/// with a timeout.
pub trait MetadataExtractor: Send + Sync {
    fn extract(&self, url: &str, content: &str) -> Result<PageMetadata, ExtractError>;
}

/// [`MetadataExtractor`] reading OpenGraph, Twitter card, and plain HTML tags
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMetadataExtractor;

impl MetadataExtractor for HtmlMetadataExtractor {
    fn extract(&self, url: &str, content: &str) -> Result<PageMetadata, ExtractError> {
        if content.trim().is_empty() {
            return Err(ExtractError::EmptyDocument {
                url: url.to_string(),
            });
        }

        let document = Html::parse_document(content);

        let title = first_of(
            &document,
            url,
            &[
                Source::Meta("meta[property='og:title']"),
                Source::Meta("meta[name='twitter:title']"),
                Source::Text("title"),
                Source::Text("h1"),
            ],
        )?;

        let description = first_of(
            &document,
            url,
            &[
                Source::Meta("meta[property='og:description']"),
                Source::Meta("meta[name='twitter:description']"),
                Source::Meta("meta[name='description']"),
                Source::Text("p"),
            ],
        )?;

        Ok(PageMetadata {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
        })
    }
}

/// Where a metadata value is read from
enum Source {
    /// `content` attribute of matching elements
    Meta(&'static str),
    /// Text content of matching elements
    Text(&'static str),
}

/// Returns the first non-empty value across the sources, in order
fn first_of(document: &Html, url: &str, sources: &[Source]) -> Result<Option<String>, ExtractError> {
    for source in sources {
        let (css, from_attr) = match source {
            Source::Meta(css) => (*css, true),
            Source::Text(css) => (*css, false),
        };

        let selector = Selector::parse(css).map_err(|e| ExtractError::Failed {
            url: url.to_string(),
            message: format!("bad selector {}: {:?}", css, e),
        })?;

        let found = document
            .select(&selector)
            .map(|element| {
                if from_attr {
                    element.value().attr("content").map(clean_text).unwrap_or_default()
                } else {
                    clean_text(&element.text().collect::<String>())
                }
            })
            .find(|value| !value.is_empty());

        if found.is_some() {
            return Ok(found);
        }
    }

    Ok(None)
}

/// Trims and collapses runs of whitespace
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
