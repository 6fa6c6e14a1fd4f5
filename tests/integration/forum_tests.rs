//! Hacker News client against a mock item API

use serde_json::json;
use thread_trawl::config::ForumConfig;
use thread_trawl::forum::{ForumApi, ForumError, HackerNewsClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HackerNewsClient {
    let config = ForumConfig {
        api_base: format!("{}/v0", server.uri()),
        ..ForumConfig::default()
    };
    HackerNewsClient::new(&config).expect("Failed to build client")
}

async fn mount_item(server: &MockServer, item_id: u64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v0/item/{}.json", item_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_item() {
    let server = MockServer::start().await;
    mount_item(
        &server,
        8863,
        json!({
            "by": "dhouston",
            "id": 8863,
            "kids": [9224, 8917],
            "score": 111,
            "time": 1175714200,
            "title": "My YC app: Dropbox",
            "type": "story",
            "url": "http://www.getdropbox.com/u/2/screencast.html"
        }),
    )
    .await;

    let item = client_for(&server).get_item(8863).await.unwrap();

    assert_eq!(item.item_id, 8863);
    assert_eq!(item.kids, vec![9224, 8917]);
    assert_eq!(item.title.as_deref(), Some("My YC app: Dropbox"));
    assert_eq!(
        item.url.as_deref(),
        Some("http://www.getdropbox.com/u/2/screencast.html")
    );
    assert!(!item.dead);
}

#[tokio::test]
async fn test_null_item_is_invalid_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/item/404404.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let result = client_for(&server).get_item(404404).await;
    assert!(matches!(result, Err(ForumError::InvalidItemId(404404))));
}

#[tokio::test]
async fn test_missing_item_is_invalid_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/item/5.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client_for(&server).get_item(5).await;
    assert!(matches!(result, Err(ForumError::InvalidItemId(5))));
}

#[tokio::test]
async fn test_server_error_is_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/item/6.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).get_item(6).await;
    assert!(matches!(result, Err(ForumError::Status { status: 500, .. })));
}

#[tokio::test]
async fn test_top_stories_limited_and_ordered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([3, 1, 2])))
        .mount(&server)
        .await;
    for id in [3, 1] {
        mount_item(&server, id, json!({"id": id, "type": "story", "title": "t"})).await;
    }
    Mock::given(method("GET"))
        .and(path("/v0/item/2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(0)
        .mount(&server)
        .await;

    let stories = client_for(&server).top_stories(2).await.unwrap();
    let ids: Vec<u64> = stories.iter().map(|s| s.item_id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[tokio::test]
async fn test_top_stories_skips_unresolvable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
        .mount(&server)
        .await;
    mount_item(&server, 2, json!({"id": 2, "type": "story"})).await;

    let stories = client_for(&server).top_stories(30).await.unwrap();
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].item_id, 2);
}

#[tokio::test]
async fn test_top_stories_listing_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/topstories.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).top_stories(30).await;
    assert!(matches!(result, Err(ForumError::Status { status: 503, .. })));
}
