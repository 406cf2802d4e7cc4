use std::path::PathBuf;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn test_router() -> axum::Router {
    let conf = leptos::prelude::get_configuration(None).unwrap();
    let ctx = app::context::Context {
        leptos_options: conf.leptos_options,
        store: app::store::Store::new(PathBuf::from("tests/data/posts"), false),
    };
    server::router(ctx)
}

async fn get(uri: &str) -> (axum::http::StatusCode, String) {
    let response = test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn unknown_paths_land_on_the_not_found_page() {
    setup();

    let (_status, body) = get("/unknown-page").await;
    assert!(body.contains("404 - Page Not Found"), "{}", body);
    assert!(body.contains("/image/404.gif"), "{}", body);
}

#[tokio::test]
async fn rss_feed_lists_posts_with_rfc822_dates() {
    setup();

    let (status, body) = get("/blog/feed.rss").await;
    assert!(status.is_success(), "{}: {}", status, body);
    assert!(body.contains("Breaking things, legally"), "{}", body);
    // 2025-01-15 was a Wednesday
    assert!(body.contains("Wed, 15 Jan 2025 00:00:00 GMT"), "{}", body);
}

#[tokio::test]
async fn json_feed_lists_posts() {
    setup();

    let (status, body) = get("/blog/feed.json").await;
    assert!(status.is_success(), "{}: {}", status, body);
    assert!(body.contains("\"hello-world\""), "{}", body);
    assert!(body.contains("Breaking things, legally"), "{}", body);
}
