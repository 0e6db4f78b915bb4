//! Health, routing and CORS integration tests

use axum::http::{header, Method, StatusCode};
use serde_json::Value;

use crate::common::RelayTestHarness;

#[tokio::test]
async fn test_liveness_check() {
    let harness = RelayTestHarness::new().await;

    let response = harness.server.get("/health/live").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_check() {
    let harness = RelayTestHarness::new().await;

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["provider"], "openrouter");
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_check_does_not_call_upstream() {
    let harness = RelayTestHarness::new().await;

    harness.server.get("/health").await.assert_status_ok();

    assert!(harness.upstream.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let harness = RelayTestHarness::new().await;

    let response = harness.server.get("/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chat_rejects_get() {
    let harness = RelayTestHarness::new().await;

    let response = harness.server.get("/chat").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_chat_cors_preflight_allows_any_origin() {
    let harness = RelayTestHarness::new().await;

    let response = harness
        .server
        .method(Method::OPTIONS, "/chat")
        .add_header(header::ORIGIN, "http://example.com".parse().unwrap())
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            "POST".parse().unwrap(),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            "content-type".parse().unwrap(),
        )
        .await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    assert!(harness.upstream.received_requests().await.is_empty());
}
