// ABOUTME: Rust models for a normalized feed produced by a route handler.
// ABOUTME: Serializes to the host service's returned shape ({title, link, item, allowEmpty}).

use serde::{Deserialize, Serialize};

/// A single entry within a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// HTML fragment.
    pub description: String,
}

/// A feed with its items in source document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub title: String,
    pub link: String,
    #[serde(rename = "item")]
    pub items: Vec<FeedItem>,
    /// When true, a feed with zero items is a valid result rather than an error.
    #[serde(rename = "allowEmpty")]
    pub allow_empty: bool,
}

impl Feed {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
