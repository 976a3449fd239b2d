//! Health and self-test endpoints.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::TestHarness;

#[tokio::test]
async fn test_ping() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness.get("/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "pong");
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn test_db_ok() {
    let harness = TestHarness::sqlite().await;
    let (status, body) = harness.get("/test-db").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Database connection successful");
    assert_eq!(body["test_query_result"], 1);
    assert!(body["database_url"].is_string());
}

#[tokio::test]
async fn test_db_failure() {
    let harness = TestHarness::failing().await;
    let (status, body) = harness.get("/test-db").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Database connection failed");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_tables() {
    let harness = TestHarness::sqlite().await;
    let (status, body) = harness.send(Method::POST, "/create-tables", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tables_created"], json!(["equations"]));
    assert_eq!(body["sample_equation"]["solution_type"], "two_real");
}

#[tokio::test]
async fn test_equation_self_test() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness.get("/test-equation").await;
    assert_eq!(status, StatusCode::OK);

    let results = body["test_results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[2]["solution_type"], "complex");
    assert_eq!(results[3]["description"], "Linear equation");
}

#[tokio::test]
async fn test_unknown_route() {
    let harness = TestHarness::memory().await;
    let (status, _) = harness.get("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let harness = TestHarness::memory().await;
    let request = axum::http::Request::builder()
        .uri("/ping")
        .header("origin", "http://localhost:3000")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(harness.router.clone(), request)
        .await
        .unwrap();
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
