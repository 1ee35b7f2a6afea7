// ABOUTME: Configuration options for the Hpoi client including Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;
use crate::extract::SITE_ROOT;

/// Configuration options for the Hpoi client.
#[derive(Debug, Clone)]
pub struct Options {
    /// Root that request URLs, item links, and thumbnails are resolved against.
    pub site_root: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            site_root: SITE_ROOT.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("hobbyfeed/", env!("CARGO_PKG_VERSION")).to_string(),
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Point the client at a different site root, e.g. a mirror or a test server.
    pub fn site_root(mut self, site_root: impl Into<String>) -> Self {
        self.opts.site_root = site_root.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client. Timeout and user agent options are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.site_root, "https://www.hpoi.net");
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert!(opts.user_agent.starts_with("hobbyfeed/"));
        assert!(opts.headers.is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let client = ClientBuilder::new()
            .site_root("http://127.0.0.1:9000")
            .timeout(Duration::from_secs(5))
            .user_agent("ua")
            .header("referer", "https://www.hpoi.net/")
            .build();
        let opts = client.options();
        assert_eq!(opts.site_root, "http://127.0.0.1:9000");
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert_eq!(opts.user_agent, "ua");
        assert_eq!(opts.headers.get("referer").map(String::as_str), Some("https://www.hpoi.net/"));
    }
}
