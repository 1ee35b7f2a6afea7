// ABOUTME: Error types for the Hpoi route including ErrorCode enum and ParseError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of route failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    InvalidRoute,
    UnknownCategory,
    Fetch,
    Timeout,
    Extract,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::InvalidRoute => "invalid route",
            ErrorCode::UnknownCategory => "unknown category",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Timeout => "timeout",
            ErrorCode::Extract => "extraction error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for route operations.
#[derive(Debug, thiserror::Error)]
pub struct ParseError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hpoi: {}", self.op)?;
        if !self.url.is_empty() {
            write!(f, " {}", self.url)?;
        }
        write!(f, ": {}", self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ParseError {
    fn with_code(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create an InvalidRoute error for a path that does not match the route pattern.
    pub fn invalid_route(path: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self::with_code(ErrorCode::InvalidRoute, path, "Route", source)
    }

    /// Create an UnknownCategory error for a key outside the category table.
    pub fn unknown_category(key: &str) -> Self {
        Self::with_code(
            ErrorCode::UnknownCategory,
            String::new(),
            "Category",
            Some(anyhow::anyhow!(
                "{:?} is not one of want, preorder, buy, care, resell",
                key
            )),
        )
    }

    /// Create a Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Fetch, url, op, source)
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Timeout, url, op, source)
    }

    /// Create an Extract error.
    pub fn extract(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Extract, url, op, source)
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is an Extract error.
    pub fn is_extract(&self) -> bool {
        self.code == ErrorCode::Extract
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is an InvalidRoute error.
    pub fn is_invalid_route(&self) -> bool {
        self.code == ErrorCode::InvalidRoute
    }

    /// Returns true if this is an UnknownCategory error.
    pub fn is_unknown_category(&self) -> bool {
        self.code == ErrorCode::UnknownCategory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_op_url_and_source() {
        let err = ParseError::fetch(
            "https://www.hpoi.net/user/1/hobby",
            "Fetch",
            Some(anyhow::anyhow!("HTTP status 503")),
        );
        assert_eq!(
            err.to_string(),
            "hpoi: Fetch https://www.hpoi.net/user/1/hobby: fetch error: HTTP status 503"
        );
        assert!(err.is_fetch());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_unknown_category_omits_empty_url() {
        let err = ParseError::unknown_category("sold");
        assert!(err.is_unknown_category());
        assert_eq!(
            err.to_string(),
            "hpoi: Category: unknown category: \"sold\" is not one of want, preorder, buy, care, resell"
        );
    }
}
