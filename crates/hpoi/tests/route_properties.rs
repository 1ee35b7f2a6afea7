// ABOUTME: Integration tests for the user collection route against a mock Hpoi server.
// ABOUTME: Covers labels for every category, document order, thumbnail rewriting, link resolution, and empty pages.

use hobbyfeed_hpoi::{Category, Client, ErrorCode, SITE_ROOT};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;

fn entry(id: usize) -> String {
    format!(
        r#"<li class="collect-hobby-list-small">
            <div class="img"><img src="https://r.hpoi.net/gk/pic/s/{id}.jpg"></div>
            <a class="name" href="hobby/{id}"> Item {id} </a>
            <div class="pay">¥{id}</div>
            <div class="score">{id}.0</div>
        </li>"#
    )
}

fn collection_page(owner: &str, n: usize) -> String {
    let entries: Vec<String> = (0..n).map(entry).collect();
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"></head><body>
            <div class="hpoi-collect-head"><div class="info"><p>{owner}</p></div></div>
            <ul>{}</ul>
        </body></html>"#,
        entries.join("")
    )
}

#[test]
fn every_category_label_appears_in_titles() {
    let client = Client::builder().build();
    let html = collection_page("owner", 1);
    for category in Category::ALL {
        let feed = client.feed_from_html(&html, "1", category).unwrap();
        assert!(feed.title.ends_with(&format!("的手办 - {}", category.label())));
        assert!(feed.items[0].title.starts_with(&format!("{}: ", category.label())));
        assert!(feed.link.ends_with(&format!("favState={}", category.key())));
    }
}

#[test]
fn items_follow_document_order() {
    let client = Client::builder().build();
    let feed = client
        .feed_from_html(&collection_page("owner", 5), "1", Category::Want)
        .unwrap();
    let titles: Vec<&str> = feed.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["想买: Item 0", "想买: Item 1", "想买: Item 2", "想买: Item 3", "想买: Item 4"]
    );
}

#[test]
fn thumbnails_are_rewritten_and_links_absolute() {
    let client = Client::builder().build();
    let feed = client
        .feed_from_html(&collection_page("owner", 3), "1", Category::Care)
        .unwrap();
    for (i, item) in feed.items.iter().enumerate() {
        assert!(item.link.starts_with(SITE_ROOT));
        assert!(item
            .description
            .starts_with(&format!("<img src=\"https://r.hpoi.net/gk/pic/n/{}.jpg\">", i)));
        assert!(!item.description.contains("/s/"));
    }
}

#[tokio::test]
async fn example_route_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/user/116297/hobby")
            .query_param("order", "actionDate")
            .query_param("view", "2")
            .query_param("favState", "buy");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(collection_page("DIYgod", 2));
    });

    let client = Client::builder().site_root(server.base_url()).build();
    let feed = client.route("/hpoi/user/116297/buy").await.unwrap();
    mock.assert();

    assert_eq!(
        feed.link,
        format!(
            "{}/user/116297/hobby?order=actionDate&view=2&favState=buy",
            server.base_url()
        )
    );
    assert_eq!(feed.title, "DIYgod的手办 - 已入");
    assert!(feed.items.iter().all(|i| i.title.starts_with("已入: ")));
    assert!(feed.allow_empty);
}

#[tokio::test]
async fn empty_collection_is_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/user/9/hobby");
        then.status(200).body(collection_page("nobody", 0));
    });

    let client = Client::builder().site_root(server.base_url()).build();
    let feed = client.user_feed("9", Category::Resell).await.unwrap();
    assert!(feed.items.is_empty());
    assert!(feed.allow_empty);
}

#[tokio::test]
async fn server_error_propagates_as_fetch_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/user/9/hobby");
        then.status(503);
    });

    let client = Client::builder().site_root(server.base_url()).build();
    let err = client.user_feed("9", Category::Buy).await.unwrap_err();
    mock.assert_calls(1);
    assert_eq!(err.code, ErrorCode::Fetch);
}

#[test]
fn json_output_matches_returned_shape() {
    let client = Client::builder().build();
    let feed = client
        .feed_from_html(&collection_page("owner", 1), "1", Category::Buy)
        .unwrap();
    let value = serde_json::to_value(&feed).unwrap();
    assert_eq!(value["allowEmpty"], serde_json::json!(true));
    assert_eq!(value["item"][0]["link"], "https://www.hpoi.net/hobby/0");
    assert_eq!(value["item"].as_array().map(Vec::len), Some(1));
}
