// ABOUTME: Typed CSS-selector queries over scraper documents and elements with a compiled-selector cache.
// ABOUTME: A missing node yields empty text and absent attributes instead of failing.

//! Selector-based node queries.
//!
//! [`Scope`] is implemented for a whole document and for a single element, so
//! the same calls work at the page level (owner name) and the entry level
//! (name, image, price, score). [`Found`] is the result of a first-match query:
//!
//! - `text()` on a missing node is the empty string.
//! - `attr()` on a missing node, or a node without the attribute, is `None`.
//!   An empty attribute value is returned as `Some("")`.
//! - `text_all()` concatenates the text of every match, like a jQuery-style `.text()`.
//!
//! Text is whitespace-normalized the same way everywhere.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `None` for an invalid selector; the failure is cached too.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    if let Ok(cache) = SELECTOR_CACHE.read() {
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    if let Ok(mut cache) = SELECTOR_CACHE.write() {
        cache
            .entry(css.to_string())
            .or_insert_with(|| compiled.clone());
    }
    compiled
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First match of a selector, possibly absent.
#[derive(Debug, Clone, Copy)]
pub struct Found<'a>(Option<ElementRef<'a>>);

impl<'a> Found<'a> {
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Normalized text content, empty when the node is absent.
    pub fn text(&self) -> String {
        self.0.map(|el| element_text(&el)).unwrap_or_default()
    }

    /// Trimmed attribute value; `None` only when the node or attribute is absent.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.and_then(|el| el.value().attr(name)).map(str::trim)
    }
}

/// Something CSS selectors can be run beneath.
pub trait Scope<'a>: Copy {
    /// All matches in document order. An invalid selector matches nothing.
    fn find_all(self, css: &str) -> Vec<ElementRef<'a>>;

    /// First match in document order.
    fn find(self, css: &str) -> Found<'a> {
        Found(self.find_all(css).into_iter().next())
    }

    /// Text of every match concatenated in document order, then normalized.
    /// Empty when nothing matches.
    fn text_all(self, css: &str) -> String {
        let raw: String = self
            .find_all(css)
            .iter()
            .flat_map(|el| el.text())
            .collect();
        normalize_whitespace(&raw)
    }
}

impl<'a> Scope<'a> for &'a Html {
    fn find_all(self, css: &str) -> Vec<ElementRef<'a>> {
        match get_or_compile(css) {
            Some(selector) => self.select(&selector).collect(),
            None => vec![],
        }
    }
}

impl<'a> Scope<'a> for ElementRef<'a> {
    fn find_all(self, css: &str) -> Vec<ElementRef<'a>> {
        match get_or_compile(css) {
            Some(selector) => self.select(&selector).collect(),
            None => vec![],
        }
    }
}

/// Normalized text content of an element.
pub fn element_text(el: &ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <html><body>
            <div class="card">
                <a class="name" href=" hobby/1 ">  First
                    Figure </a>
                <img src="">
            </div>
            <div class="card">
                <a class="name">Second</a>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_find_all_in_document_order() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let names: Vec<String> = doc
            .find_all(".card .name")
            .iter()
            .map(element_text)
            .collect();
        assert_eq!(names, vec!["First Figure", "Second"]);
    }

    #[test]
    fn test_found_text_and_attr() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let cards = doc.find_all(".card");
        let first = cards[0].find(".name");
        assert!(first.is_present());
        assert_eq!(first.text(), "First Figure");
        assert_eq!(first.attr("href"), Some("hobby/1"));
    }

    #[test]
    fn test_missing_node_and_attr() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let cards = doc.find_all(".card");

        let missing = cards[1].find(".pay");
        assert!(!missing.is_present());
        assert_eq!(missing.text(), "");
        assert_eq!(missing.attr("href"), None);

        assert_eq!(cards[1].find(".name").attr("href"), None);
        assert_eq!(cards[0].find("img").attr("src"), Some(""));
    }

    #[test]
    fn test_text_all_concatenates_matches() {
        let doc = Html::parse_document(
            r#"<div class="card"><span class="pay">¥1,000</span><span class="pay"> (定金)</span></div>"#,
        );
        let card = doc.find_all(".card")[0];
        assert_eq!(card.text_all(".pay"), "¥1,000 (定金)");
        assert_eq!(card.text_all(".score"), "");
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = Html::parse_document(SAMPLE_HTML);
        assert!(doc.find_all("[[[invalid").is_empty());
        assert!(get_or_compile("[[[invalid").is_none());
        assert!(get_or_compile("div.card").is_some());
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  hello   world  "), "hello world");
        assert_eq!(normalize_whitespace("no\textra\nspaces"), "no extra spaces");
        assert_eq!(normalize_whitespace(""), "");
    }
}
