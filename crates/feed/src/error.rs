// ABOUTME: Error types for feed rendering operations.
// ABOUTME: Provides FeedError enum with Render, Serialize, and Empty variants.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while rendering a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Failed to write the XML document.
    #[error("failed to render feed: {0}")]
    Render(String),

    /// Failed to serialize the feed to JSON.
    #[error("failed to serialize feed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The feed has no items and does not allow being empty.
    #[error("feed is empty: no items found")]
    Empty,

    /// Unrecognized output format name.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}

impl FeedError {
    /// Creates a Render error from an underlying writer error.
    pub fn render(err: impl fmt::Display) -> Self {
        FeedError::Render(err.to_string())
    }
}
