//! Full runs against a mock forum API and mock linked pages

use serde_json::json;
use thread_trawl::config::Config;
use thread_trawl::output::{to_json, write_snapshot};
use thread_trawl::{Category, Orchestrator};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing both the forum API and the pages at the mock server
fn create_test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.forum.api_base = format!("{}/v0", server.uri());
    config.fetch.request_timeout = 2;
    config.fetch.enrich_timeout = 5;
    config.fetch.extract_timeout = 5;
    config
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, route: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_single_story() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_json(&server, "/v0/topstories.json", json!([1])).await;
    mount_json(
        &server,
        "/v0/item/1.json",
        json!({"id": 1, "type": "story", "title": "Example story", "url": format!("{}/", base)}),
    )
    .await;
    mount_page(
        &server,
        "/",
        r#"<html><head><title>Example</title><meta name="description" content="short"></head></html>"#,
    )
    .await;

    let config = create_test_config(&server);
    let snapshot = Orchestrator::from_config(config).unwrap().run().await.unwrap();

    assert_eq!(snapshot.links.len(), 1);
    let link = &snapshot.links[0];
    assert_eq!(link.item_id, 1);
    assert_eq!(link.root_id, None);
    assert_eq!(link.original_title.as_deref(), Some("Example story"));
    assert_eq!(link.title, "Example");
    assert_eq!(link.description, "short");
    assert_eq!(link.url, base);
    assert_eq!(link.category, Category::Site);
}

#[tokio::test]
async fn test_full_run_comment_tree() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_json(&server, "/v0/topstories.json", json!([1])).await;
    mount_json(
        &server,
        "/v0/item/1.json",
        json!({"id": 1, "type": "story", "title": "Ask: tools?", "kids": [2, 3, 4]}),
    )
    .await;
    mount_json(
        &server,
        "/v0/item/2.json",
        json!({
            "id": 2,
            "type": "comment",
            "text": format!(
                r#"I use <a href="{0}/article">this</a> and <a href="{0}/slides.pdf">slides</a>"#,
                base
            ),
            "kids": [5]
        }),
    )
    .await;
    mount_json(
        &server,
        "/v0/item/5.json",
        json!({
            "id": 5,
            "type": "comment",
            "text": format!(r#"Also <a href="{}/article">same one</a>"#, base)
        }),
    )
    .await;
    mount_json(
        &server,
        "/v0/item/3.json",
        json!({"id": 3, "type": "comment", "dead": true,
               "text": format!(r#"<a href="{}/spam">spam</a>"#, base)}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v0/item/4.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    mount_page(
        &server,
        "/article",
        r#"<html><head><meta property="og:title" content="An article"></head></html>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/slides.pdf"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/spam"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let (snapshot, stats) = Orchestrator::from_config(config)
        .unwrap()
        .run_with_stats()
        .await
        .unwrap();

    assert_eq!(snapshot.links.len(), 1);
    let link = &snapshot.links[0];
    assert_eq!(link.item_id, 2);
    assert_eq!(link.root_id, Some(1));
    assert_eq!(link.title, "An article");
    assert_eq!(link.url, format!("{}/article", base));
    assert_eq!(link.category, Category::Uncategorized);

    assert_eq!(stats.stories, 1);
    assert_eq!(stats.harvested, 2);
    assert_eq!(stats.after_filter, 1);
    assert_eq!(stats.kept, 1);
}

#[tokio::test]
async fn test_failing_links_skipped() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_json(&server, "/v0/topstories.json", json!([1, 2])).await;
    mount_json(
        &server,
        "/v0/item/1.json",
        json!({"id": 1, "type": "story", "title": "Broken", "url": format!("{}/broken", base)}),
    )
    .await;
    mount_json(
        &server,
        "/v0/item/2.json",
        json!({"id": 2, "type": "story", "title": "Fine", "url": format!("{}/fine", base)}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(&server, "/fine", "<html><head><title>Fine</title></head></html>").await;

    let config = create_test_config(&server);
    let (snapshot, stats) = Orchestrator::from_config(config)
        .unwrap()
        .run_with_stats()
        .await
        .unwrap();

    assert_eq!(snapshot.links.len(), 1);
    assert_eq!(snapshot.links[0].item_id, 2);
    assert_eq!(stats.failures.get("status"), Some(&1));
}

#[tokio::test]
async fn test_comment_server_error_skips_only_that_subtree() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_json(&server, "/v0/topstories.json", json!([1])).await;
    mount_json(
        &server,
        "/v0/item/1.json",
        json!({"id": 1, "type": "story", "title": "Thread", "kids": [2, 3]}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v0/item/2.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_json(
        &server,
        "/v0/item/3.json",
        json!({
            "id": 3,
            "type": "comment",
            "text": format!(r#"<a href="{}/ok">ok</a>"#, base)
        }),
    )
    .await;
    mount_page(&server, "/ok", "<html><head><title>Ok</title></head></html>").await;

    let config = create_test_config(&server);
    let (snapshot, stats) = Orchestrator::from_config(config)
        .unwrap()
        .run_with_stats()
        .await
        .unwrap();

    assert_eq!(stats.harvested, 1);
    assert_eq!(snapshot.links.len(), 1);
    assert_eq!(snapshot.links[0].item_id, 3);
    assert_eq!(snapshot.links[0].url, format!("{}/ok", base));
}

#[tokio::test]
async fn test_unavailable_forum_aborts_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/topstories.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let result = Orchestrator::from_config(config).unwrap().run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_snapshot_written_to_file() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_json(&server, "/v0/topstories.json", json!([1])).await;
    mount_json(
        &server,
        "/v0/item/1.json",
        json!({"id": 1, "type": "story", "title": "Story", "url": format!("{}/page", base)}),
    )
    .await;
    mount_page(
        &server,
        "/page",
        "<html><head><title>Caf\u{e9}\u{85} page</title></head></html>",
    )
    .await;

    let config = create_test_config(&server);
    let snapshot = Orchestrator::from_config(config).unwrap().run().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("links.json");
    write_snapshot(&snapshot, &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, to_json(&snapshot).unwrap());

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["links"][0]["title"], "Café page");
    assert_eq!(value["links"][0]["item_url"], "https://news.ycombinator.com/item?id=1");
    assert_eq!(value["categories"].as_array().unwrap().len(), 10);
    assert!(value["timestamp"].as_str().unwrap().ends_with("+00:00"));
}
