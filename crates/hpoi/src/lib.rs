// ABOUTME: Library entry point for the Hpoi user collection route.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Category, RouteParams, ParseError, ErrorCode, Options.

//! Turns an Hpoi user's collection page into a normalized feed.
//!
//! # Example
//!
//! ```no_run
//! use hobbyfeed_hpoi::{Category, Client, ParseError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ParseError> {
//!     let client = Client::builder().build();
//!     let feed = client.user_feed("116297", Category::Buy).await?;
//!     println!("{} ({} items)", feed.title, feed.items.len());
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod client;
pub mod error;
pub mod extract;
pub mod options;
pub mod query;
pub mod resource;
pub mod route;

pub use crate::category::Category;
pub use crate::client::Client;
pub use crate::error::{ErrorCode, ParseError};
pub use crate::extract::{extract_feed, request_url, CollectionEntry, SITE_ROOT};
pub use crate::options::{ClientBuilder, Options};
pub use crate::route::{category_table, RouteInfo, RouteParams, USER_ROUTE};
pub use hobbyfeed_feed::{Feed, FeedItem};
