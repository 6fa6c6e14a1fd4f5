use serde::Deserialize;

/// A story or comment as returned by the item API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Item identifier
    #[serde(rename = "id")]
    pub item_id: u64,

    /// Child comment ids, in display order
    #[serde(default)]
    pub kids: Vec<u64>,

    /// Raw HTML body (comments and text posts)
    #[serde(default)]
    pub text: Option<String>,

    /// Flagged/killed by moderation
    #[serde(default)]
    pub dead: bool,

    /// Outbound link (link stories only)
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

impl Item {
    /// Creates a link story
    pub fn story(item_id: u64, url: &str, title: &str) -> Self {
        Self {
            item_id,
            url: Some(url.to_string()),
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    /// Creates a comment with the given HTML text
    pub fn comment(item_id: u64, text: &str) -> Self {
        Self {
            item_id,
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// Sets the child comment ids
    pub fn with_kids(mut self, kids: Vec<u64>) -> Self {
        self.kids = kids;
        self
    }

    /// Marks the item as dead
    pub fn killed(mut self) -> Self {
        self.dead = true;
        self
    }
}
