// ABOUTME: The closed set of favorite-state categories on an Hpoi profile and their labels.
// ABOUTME: Parsing a key outside the set yields an UnknownCategory error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Favorite-state filter applied to a user's collection page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Want,
    Preorder,
    Buy,
    Care,
    Resell,
}

impl Category {
    /// Every category, in the order the site lists them.
    pub const ALL: [Category; 5] = [
        Category::Want,
        Category::Preorder,
        Category::Buy,
        Category::Care,
        Category::Resell,
    ];

    /// The `favState` query value.
    pub fn key(self) -> &'static str {
        match self {
            Category::Want => "want",
            Category::Preorder => "preorder",
            Category::Buy => "buy",
            Category::Care => "care",
            Category::Resell => "resell",
        }
    }

    /// Human-readable label used in feed and item titles.
    pub fn label(self) -> &'static str {
        match self {
            Category::Want => "想买",
            Category::Preorder => "预定",
            Category::Buy => "已入",
            Category::Care => "关注",
            Category::Resell => "有过",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    /// Keys are matched exactly; the site treats `favState` case-sensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ParseError::unknown_category(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
            assert_eq!(category.to_string(), category.key());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Want.label(), "想买");
        assert_eq!(Category::Preorder.label(), "预定");
        assert_eq!(Category::Buy.label(), "已入");
        assert_eq!(Category::Care.label(), "关注");
        assert_eq!(Category::Resell.label(), "有过");
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        for key in ["", "BUY", "sold", "buy "] {
            let err = key.parse::<Category>().expect_err("should reject key");
            assert!(err.is_unknown_category(), "key {:?}", key);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Category::Preorder).unwrap();
        assert_eq!(json, "\"preorder\"");
        let back: Category = serde_json::from_str("\"resell\"").unwrap();
        assert_eq!(back, Category::Resell);
    }
}
