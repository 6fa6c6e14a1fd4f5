//! HTTP page fetching against a mock server

use std::time::Duration;
use thread_trawl::config::FetchConfig;
use thread_trawl::enrich::{FetchError, HttpFetcher, PageFetcher};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(&FetchConfig::default()).expect("Failed to build fetcher")
}

#[tokio::test]
async fn test_fetch_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Article</title></head></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/article", server.uri());
    let page = fetcher().fetch(&url).await.unwrap();

    assert_eq!(page.status_code, 200);
    assert_eq!(page.final_url, url);
    assert!(page.body.contains("<title>Article</title>"));
}

#[tokio::test]
async fn test_non_success_status_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(410).set_body_string("gone"))
        .mount(&server)
        .await;

    let page = fetcher()
        .fetch(&format!("{}/gone", server.uri()))
        .await
        .unwrap();
    assert_eq!(page.status_code, 410);
}

#[tokio::test]
async fn test_redirect_reports_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri()).as_str()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>moved</html>"))
        .mount(&server)
        .await;

    let page = fetcher()
        .fetch(&format!("{}/old", server.uri()))
        .await
        .unwrap();

    assert_eq!(page.status_code, 200);
    assert_eq!(page.final_url, format!("{}/new", server.uri()));
}

#[tokio::test]
async fn test_redirect_loop_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/loop", server.uri()).as_str()),
        )
        .mount(&server)
        .await;

    let result = fetcher().fetch(&format!("{}/loop", server.uri())).await;
    assert!(matches!(result, Err(FetchError::RedirectLimit { .. })));
}

#[tokio::test]
async fn test_slow_page_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = FetchConfig {
        request_timeout: 1,
        ..FetchConfig::default()
    };
    let fetcher = HttpFetcher::new(&config).unwrap();

    let result = fetcher.fetch(&format!("{}/slow", server.uri())).await;
    assert!(matches!(result, Err(FetchError::Timeout { .. })));
}
