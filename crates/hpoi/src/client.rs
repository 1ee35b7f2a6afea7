// ABOUTME: The main Client struct that fetches Hpoi collection pages and turns them into feeds.
// ABOUTME: Provides async user_feed() and route() plus a synchronous feed_from_html() for saved pages.

use hobbyfeed_feed::Feed;
use tracing::info;

use crate::category::Category;
use crate::error::ParseError;
use crate::extract::{extract_feed, request_url};
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};
use crate::route::RouteParams;

/// Fetches collection pages and extracts feeds from them.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// The collection page URL that `user_feed` would request.
    pub fn request_url(&self, user_id: &str, category: Category) -> Result<String, ParseError> {
        request_url(&self.opts.site_root, user_id, category)
    }

    /// Fetch a user's collection page for `category` and build its feed.
    ///
    /// Issues exactly one GET. Transport errors and non-2xx responses are
    /// returned as-is; nothing is retried.
    pub async fn user_feed(&self, user_id: &str, category: Category) -> Result<Feed, ParseError> {
        let url = self.request_url(user_id, category)?;

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            ..Default::default()
        };
        let fetched = fetch(&self.http_client, &url, &fetch_opts).await?;

        let feed = extract_feed(&fetched.text(), category, &url, &self.opts.site_root)?;
        info!(user_id, %category, items = feed.items.len(), "built collection feed");
        Ok(feed)
    }

    /// Run the route for a path such as `/user/116297/buy`.
    ///
    /// Unknown categories are rejected before any request is made.
    pub async fn route(&self, path: &str) -> Result<Feed, ParseError> {
        let params = RouteParams::from_path(path)?;
        self.user_feed(&params.user_id, params.category).await
    }

    /// Build the feed from an already downloaded collection page.
    pub fn feed_from_html(
        &self,
        html: &str,
        user_id: &str,
        category: Category,
    ) -> Result<Feed, ParseError> {
        let url = self.request_url(user_id, category)?;
        extract_feed(html, category, &url, &self.opts.site_root)
    }
}
