// ABOUTME: Serializers that turn a Feed into RSS 2.0, Atom 1.0, or JSON output.
// ABOUTME: XML output is written with quick-xml so text and attribute values are escaped.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::FeedError;
use crate::models::Feed;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Rss,
    Atom,
    #[default]
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Rss => "rss",
            OutputFormat::Atom => "atom",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OutputFormat {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rss" | "rss2" => Ok(OutputFormat::Rss),
            "atom" => Ok(OutputFormat::Atom),
            "json" => Ok(OutputFormat::Json),
            other => Err(FeedError::UnknownFormat(other.to_string())),
        }
    }
}

/// Renders a feed in the requested format.
///
/// Feeds that do not allow being empty are rejected when they have no items.
/// Atom output is stamped with the current time.
pub fn render(feed: &Feed, format: OutputFormat, pretty: bool) -> Result<String, FeedError> {
    if feed.is_empty() && !feed.allow_empty {
        return Err(FeedError::Empty);
    }
    match format {
        OutputFormat::Rss => to_rss(feed),
        OutputFormat::Atom => to_atom(feed, Utc::now()),
        OutputFormat::Json => to_json(feed, pretty),
    }
}

/// Serializes the feed to the JSON shape `{title, link, item, allowEmpty}`.
pub fn to_json(feed: &Feed, pretty: bool) -> Result<String, FeedError> {
    let out = if pretty {
        serde_json::to_string_pretty(feed)?
    } else {
        serde_json::to_string(feed)?
    };
    Ok(out)
}

/// Renders an RSS 2.0 document. Item links double as permalink guids.
pub fn to_rss(feed: &Feed) -> Result<String, FeedError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_decl(&mut writer)?;

    start(&mut writer, BytesStart::new("rss").with_attributes([("version", "2.0")]))?;
    start(&mut writer, BytesStart::new("channel"))?;
    text_element(&mut writer, "title", &feed.title)?;
    text_element(&mut writer, "link", &feed.link)?;
    text_element(&mut writer, "description", &feed.title)?;

    for item in &feed.items {
        start(&mut writer, BytesStart::new("item"))?;
        text_element(&mut writer, "title", &item.title)?;
        text_element(&mut writer, "link", &item.link)?;
        text_element(&mut writer, "description", &item.description)?;
        start(
            &mut writer,
            BytesStart::new("guid").with_attributes([("isPermaLink", "true")]),
        )?;
        text(&mut writer, &item.link)?;
        end(&mut writer, "guid")?;
        end(&mut writer, "item")?;
    }

    end(&mut writer, "channel")?;
    end(&mut writer, "rss")?;
    finish(writer)
}

/// Renders an Atom 1.0 document with `updated` as the feed and entry timestamp.
pub fn to_atom(feed: &Feed, updated: DateTime<Utc>) -> Result<String, FeedError> {
    let updated = updated.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_decl(&mut writer)?;

    start(&mut writer, BytesStart::new("feed").with_attributes([("xmlns", ATOM_NS)]))?;
    text_element(&mut writer, "title", &feed.title)?;
    text_element(&mut writer, "id", &feed.link)?;
    empty(
        &mut writer,
        BytesStart::new("link").with_attributes([("href", feed.link.as_str())]),
    )?;
    text_element(&mut writer, "updated", &updated)?;

    for item in &feed.items {
        start(&mut writer, BytesStart::new("entry"))?;
        text_element(&mut writer, "title", &item.title)?;
        text_element(&mut writer, "id", &item.link)?;
        empty(
            &mut writer,
            BytesStart::new("link").with_attributes([("href", item.link.as_str())]),
        )?;
        text_element(&mut writer, "updated", &updated)?;
        start(
            &mut writer,
            BytesStart::new("summary").with_attributes([("type", "html")]),
        )?;
        text(&mut writer, &item.description)?;
        end(&mut writer, "summary")?;
        end(&mut writer, "entry")?;
    }

    end(&mut writer, "feed")?;
    finish(writer)
}

fn write_decl<W: Write>(writer: &mut Writer<W>) -> Result<(), FeedError> {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(FeedError::render)
}

fn start<W: Write>(writer: &mut Writer<W>, tag: BytesStart<'_>) -> Result<(), FeedError> {
    writer
        .write_event(Event::Start(tag))
        .map_err(FeedError::render)
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), FeedError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(FeedError::render)
}

fn empty<W: Write>(writer: &mut Writer<W>, tag: BytesStart<'_>) -> Result<(), FeedError> {
    writer
        .write_event(Event::Empty(tag))
        .map_err(FeedError::render)
}

fn text<W: Write>(writer: &mut Writer<W>, value: &str) -> Result<(), FeedError> {
    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(FeedError::render)
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> Result<(), FeedError> {
    start(writer, BytesStart::new(name))?;
    text(writer, value)?;
    end(writer, name)
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, FeedError> {
    String::from_utf8(writer.into_inner()).map_err(FeedError::render)
}
