// ABOUTME: Core feed model library for hobbyfeed.
// ABOUTME: Provides the normalized Feed/FeedItem types and RSS, Atom, and JSON renderers.

pub mod error;
pub mod models;
pub mod render;

pub use error::FeedError;
pub use models::{Feed, FeedItem};
pub use render::{render, to_atom, to_json, to_rss, OutputFormat};
