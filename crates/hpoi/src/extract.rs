// ABOUTME: Turns an Hpoi user collection page into a normalized Feed.
// ABOUTME: Builds the request URL, walks collection entries, and composes item titles, links, and descriptions.

//! Collection page extraction.
//!
//! Each `.collect-hobby-list-small` node becomes one [`FeedItem`], in document
//! order. Within an entry:
//!
//! - `.name` text is the display name and the first `.name` href the item link.
//! - `img[src]` is the thumbnail; `/s/` segments are rewritten to `/n/`.
//! - `.pay` and `.score` text are copied into the description.
//!
//! Text fields concatenate every match inside the entry. An absent `.name`
//! href or `img` src aborts the whole extraction with an `Extract` error; an
//! empty one does not. Missing text nodes render as empty strings.

use hobbyfeed_feed::{Feed, FeedItem};
use scraper::{ElementRef, Html};
use tracing::debug;
use url::Url;

use crate::category::Category;
use crate::error::ParseError;
use crate::query::Scope;

/// Default site root.
pub const SITE_ROOT: &str = "https://www.hpoi.net";

pub const ENTRY_SELECTOR: &str = ".collect-hobby-list-small";
const NAME_SELECTOR: &str = ".name";
const IMAGE_SELECTOR: &str = "img";
const PRICE_SELECTOR: &str = ".pay";
const SCORE_SELECTOR: &str = ".score";
const OWNER_SELECTOR: &str = ".hpoi-collect-head .info p";

/// One collected item as rendered on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    pub name: String,
    /// Absolute item URL.
    pub link: String,
    /// Absolute, already rewritten to the larger image.
    pub thumbnail: String,
    pub price: String,
    pub score: String,
}

impl CollectionEntry {
    /// Builds the feed item for this entry under the given category.
    pub fn to_item(&self, category: Category) -> FeedItem {
        FeedItem {
            title: format!("{}: {}", category.label(), self.name),
            link: self.link.clone(),
            description: format!(
                "<img src=\"{}\"><br>{}<br>{}",
                escape_html(&self.thumbnail),
                escape_html(&self.price),
                escape_html(&self.score)
            ),
        }
    }
}

/// Parses the site root into a base URL whose path ends in `/`, so joins append to it.
pub fn site_base(site_root: &str) -> Result<Url, ParseError> {
    let normalized = format!("{}/", site_root.trim().trim_end_matches('/'));
    let base = Url::parse(&normalized).map_err(|e| {
        ParseError::invalid_url(site_root, "SiteRoot", Some(anyhow::anyhow!("{}", e)))
    })?;
    match base.scheme() {
        "http" | "https" => Ok(base),
        _ => Err(ParseError::invalid_url(
            site_root,
            "SiteRoot",
            Some(anyhow::anyhow!("scheme must be http or https")),
        )),
    }
}

/// Builds the collection page URL for a user and category.
///
/// The user id is interpolated verbatim into the path.
pub fn request_url(site_root: &str, user_id: &str, category: Category) -> Result<String, ParseError> {
    let base = site_base(site_root)?;
    let raw = format!(
        "{}user/{}/hobby?order=actionDate&view=2&favState={}",
        base,
        user_id,
        category.key()
    );
    let url = Url::parse(&raw).map_err(|e| {
        ParseError::invalid_url(raw.as_str(), "RequestUrl", Some(anyhow::anyhow!("{}", e)))
    })?;
    Ok(url.to_string())
}

/// Resolves a scraped `href`/`src` against the site root.
///
/// Relative references get the site root; absolute and protocol-relative
/// references keep their own host.
pub fn resolve_url(base: &Url, reference: &str) -> Option<String> {
    base.join(reference.trim()).ok().map(|u| u.to_string())
}

/// Rewrites every `/s/` (small) path segment to `/n/` (normal size).
pub fn rewrite_thumbnail(src: &str) -> String {
    let segments: Vec<&str> = src.split('/').collect();
    let last = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| if *seg == "s" && i > 0 && i < last { "n" } else { *seg })
        .collect::<Vec<_>>()
        .join("/")
}

/// Escapes text for inclusion in an HTML fragment or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reads one entry node. `index` is only used in error messages.
fn read_entry(
    entry: ElementRef<'_>,
    index: usize,
    base: &Url,
    page_url: &str,
) -> Result<CollectionEntry, ParseError> {
    let missing = |what: &str| {
        ParseError::extract(
            page_url,
            "Extract",
            Some(anyhow::anyhow!("entry {}: {}", index, what)),
        )
    };

    let href = entry
        .find(NAME_SELECTOR)
        .attr("href")
        .ok_or_else(|| missing("missing href on .name"))?;
    let link = resolve_url(base, href).ok_or_else(|| missing("unresolvable item link"))?;

    let src = entry
        .find(IMAGE_SELECTOR)
        .attr("src")
        .ok_or_else(|| missing("missing src on img"))?;
    // lazy-loaded images ship an empty src; keep it empty rather than pointing at the site root
    let thumbnail = if src.is_empty() {
        String::new()
    } else {
        let resolved = resolve_url(base, src).ok_or_else(|| missing("unresolvable thumbnail"))?;
        rewrite_thumbnail(&resolved)
    };

    Ok(CollectionEntry {
        name: entry.text_all(NAME_SELECTOR),
        link,
        thumbnail,
        price: entry.text_all(PRICE_SELECTOR),
        score: entry.text_all(SCORE_SELECTOR),
    })
}

/// Reads every collection entry in document order.
pub fn collection_entries(
    doc: &Html,
    base: &Url,
    page_url: &str,
) -> Result<Vec<CollectionEntry>, ParseError> {
    doc.find_all(ENTRY_SELECTOR)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| read_entry(entry, i, base, page_url))
        .collect()
}

/// Display name of the page owner, empty when the profile header is absent.
pub fn owner_name(doc: &Html) -> String {
    doc.find(OWNER_SELECTOR).text()
}

/// Builds the feed for an already fetched collection page.
///
/// `request_url` becomes the feed link. Zero entries is a valid, empty feed.
pub fn extract_feed(
    html: &str,
    category: Category,
    request_url: &str,
    site_root: &str,
) -> Result<Feed, ParseError> {
    let base = site_base(site_root)?;
    let doc = Html::parse_document(html);

    let entries = collection_entries(&doc, &base, request_url)?;
    debug!(count = entries.len(), url = %request_url, "extracted collection entries");

    let items = entries.iter().map(|e| e.to_item(category)).collect();
    let title = format!("{}的手办 - {}", owner_name(&doc), category.label());

    Ok(Feed {
        title,
        link: request_url.to_string(),
        items,
        allow_empty: true,
    })
}
