mod common;

use axum::http::StatusCode;
use kortlink::domain::repositories::LinkRepository;
use kortlink::infrastructure::cache::CacheService;
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_returns_created_record() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/v1/shortlink")
        .json(&json!({ "original_url": "http://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["message"], "Short link created successfully");
    assert_eq!(body["data"]["original_url"], "http://example.com");
    assert_eq!(body["data"]["access_count"], 0);
    assert_eq!(body["data"]["short_url"].as_str().unwrap().len(), 8);
}

#[tokio::test]
async fn test_create_accepts_camel_case_field() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/v1/shortlink")
        .json(&json!({ "originalURL": "https://example.com/camel" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["original_url"], "https://example.com/camel");
}

#[tokio::test]
async fn test_create_warms_cache() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/v1/shortlink")
        .json(&json!({ "original_url": "https://example.com/warm" }))
        .await;

    let body: Value = response.json();
    let token = body["data"]["short_url"].as_str().unwrap();

    let cached = ctx.cache.get_url(token).await.unwrap();
    assert_eq!(cached.as_deref(), Some("https://example.com/warm"));
}

#[tokio::test]
async fn test_create_invalid_url() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/v1/shortlink")
        .json(&json!({ "original_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"], "invalid URL format");
    assert!(body.get("data").is_none());
    assert!(ctx.repository.is_empty());
}

#[tokio::test]
async fn test_create_rejects_control_characters() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/v1/shortlink")
        .json(&json!({ "original_url": "http://example.com/a\u{1}b" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "invalid URL format");
    assert!(ctx.repository.is_empty());
}

#[tokio::test]
async fn test_create_missing_url() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server.post("/api/v1/shortlink").json(&json!({})).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "original URL is required");
}

#[tokio::test]
async fn test_create_malformed_json() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/v1/shortlink")
        .text("{\"original_url\":")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid request payload");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_success() {
    let ctx = common::TestContext::new();
    let link = ctx.create_link("https://example.com/old").await;
    let server = ctx.server();

    let response = server
        .put(&format!("/api/v1/{}", link.short_url))
        .json(&json!({ "original_url": "https://example.com/new" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Short URL updated successfully");

    let stored = ctx.repository.get_original_url(&link.short_url).await.unwrap();
    assert_eq!(stored, "https://example.com/new");
}

#[tokio::test]
async fn test_update_overwrites_cached_destination() {
    let ctx = common::TestContext::new();
    let link = ctx.create_link("https://example.com/u1").await;
    let server = ctx.server();

    // First redirect is served from the warmed cache.
    server
        .get(&format!("/api/v1/{}", link.short_url))
        .await
        .assert_status(StatusCode::FOUND);

    server
        .put(&format!("/api/v1/{}", link.short_url))
        .json(&json!({ "original_url": "https://example.com/u2" }))
        .await
        .assert_status_ok();

    let response = server.get(&format!("/api/v1/{}", link.short_url)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/u2");

    let cached = ctx.cache.get_url(&link.short_url).await.unwrap();
    assert_eq!(cached.as_deref(), Some("https://example.com/u2"));
}

#[tokio::test]
async fn test_update_not_found() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server
        .put("/api/v1/missing1")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["statusCode"], 404);
}

#[tokio::test]
async fn test_update_unknown_token_with_empty_url_is_not_found() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server
        .put("/api/v1/missing1")
        .json(&json!({ "original_url": "" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_empty_url() {
    let ctx = common::TestContext::new();
    let link = ctx.create_link("https://example.com/keep").await;
    let server = ctx.server();

    let response = server
        .put(&format!("/api/v1/{}", link.short_url))
        .json(&json!({ "original_url": "" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "original URL is required");
}

#[tokio::test]
async fn test_update_invalid_url_keeps_destination() {
    let ctx = common::TestContext::new();
    let link = ctx.create_link("https://example.com/keep").await;
    let server = ctx.server();

    let response = server
        .put(&format!("/api/v1/{}", link.short_url))
        .json(&json!({ "original_url": "ftp//broken" }))
        .await;

    response.assert_status_bad_request();

    let stored = ctx.repository.get_original_url(&link.short_url).await.unwrap();
    assert_eq!(stored, "https://example.com/keep");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_success_evicts_cache() {
    let ctx = common::TestContext::new();
    let link = ctx.create_link("https://example.com/gone").await;
    let server = ctx.server();

    let response = server
        .delete(&format!("/api/v1/{}", link.short_url))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Short URL deleted successfully");

    assert!(ctx.repository.is_empty());
    assert_eq!(ctx.cache.get_url(&link.short_url).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_not_found() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server.delete("/api/v1/missing1").await;

    response.assert_status_not_found();
}
