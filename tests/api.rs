use axum::http::StatusCode;
use axum_test::TestServer;
use comic_news::api::routes::create_router;
use comic_news::config::{Config, NewsSettings};
use comic_news::news::{Category, NewsResponse};
use comic_news::AppState;
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::Value;

const BODY: &str = r#"{
    "status": "ok",
    "totalResults": 1,
    "articles": [{
        "source": { "id": null, "name": "Byte Times" },
        "author": null,
        "title": "Quantum laptops ship",
        "description": null,
        "url": "https://example.com/quantum",
        "urlToImage": null,
        "publishedAt": "2024-09-10T15:00:00Z",
        "content": null
    }]
}"#;

fn state(base_url: String) -> AppState {
    let config = Config {
        server_addr: "127.0.0.1:0".parse().unwrap(),
        news: NewsSettings {
            base_url,
            ..NewsSettings::default()
        },
        api_key_var: "COMIC_NEWS_TEST_UNSET_KEY".to_string(),
    };
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn serves_sample_news_without_key() {
    let server = TestServer::new(create_router(state("http://127.0.0.1:9".into()))).unwrap();

    let response = server.get("/api/news").await;
    response.assert_status_ok();
    assert_eq!(
        response.header("cache-control"),
        "public, s-maxage=3600, stale-while-revalidate=86400"
    );
    assert_eq!(response.header("x-news-source"), "sample");

    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["totalResults"], 5);
    assert_eq!(body["articles"].as_array().unwrap().len(), 5);
    assert!(body["articles"][0]["publishedAt"].is_string());
}

#[tokio::test]
async fn sample_is_identical_across_categories() {
    let server = TestServer::new(create_router(state("http://127.0.0.1:9".into()))).unwrap();

    let general = server.get("/api/news").add_query_param("category", "general").await;
    let sports = server.get("/api/news").add_query_param("category", "sports").await;

    assert_eq!(general.json::<NewsResponse>(), sports.json::<NewsResponse>());
}

#[tokio::test]
async fn serves_warm_cache_entry() {
    let mut upstream = Server::new_async().await;
    let mock = upstream
        .mock("GET", "/top-headlines")
        .match_query(Matcher::UrlEncoded("category".into(), "technology".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BODY)
        .expect(1)
        .create_async()
        .await;

    let app_state = state(upstream.url());
    let warmed = app_state.news.get_news(Category::Technology, Some("key")).await;
    assert_eq!(warmed.kind(), "fresh");

    let server = TestServer::new(create_router(app_state)).unwrap();
    let response = server
        .get("/api/news")
        .add_query_param("category", "Technology")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-news-source"), "cached");
    let expected: NewsResponse = serde_json::from_str(BODY).unwrap();
    assert_eq!(response.json::<NewsResponse>(), expected);

    mock.assert_async().await;
}

#[tokio::test]
async fn rejects_unknown_category() {
    let server = TestServer::new(create_router(state("http://127.0.0.1:9".into()))).unwrap();

    let response = server
        .get("/api/news")
        .add_query_param("category", "gossip")
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "unknown category: gossip");
}

#[tokio::test]
async fn malformed_query_uses_json_error_shape() {
    let server = TestServer::new(create_router(state("http://127.0.0.1:9".into()))).unwrap();

    let response = server
        .get("/api/news?category=science&category=health")
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("invalid query:"), "{error}");
}
