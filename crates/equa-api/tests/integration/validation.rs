//! Request validation: content type, body shape, coefficient parsing.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::common::TestHarness;

#[tokio::test]
async fn test_missing_fields() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness.post("/api/equation", json!({ "a": 1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Missing required fields: b, c");
    assert_eq!(body["required_fields"], json!(["a", "b", "c"]));
}

#[tokio::test]
async fn test_non_numeric_coefficient() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness
        .post("/api/equation", json!({ "a": "one", "b": 2, "c": 3 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Coefficients a, b, c must be valid numbers");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_numeric_strings_accepted() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness
        .post("/api/equation", json!({ "a": "1", "b": " -5 ", "c": "6.0" }))
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["solution_type"], "two_real");
}

#[tokio::test]
async fn test_boolean_and_null_rejected() {
    let harness = TestHarness::memory().await;
    for payload in [
        json!({ "a": true, "b": 2, "c": 3 }),
        json!({ "a": 1, "b": null, "c": 3 }),
    ] {
        let (status, body) = harness.post("/api/equation", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }
}

#[tokio::test]
async fn test_non_object_body() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness.post("/api/equation", json!([1, 2, 3])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request body must be a JSON object");
}

#[tokio::test]
async fn test_wrong_content_type() {
    let harness = TestHarness::memory().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/equation")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"a":1,"b":2,"c":3}"#))
        .unwrap();

    let (status, body) = harness.send_request(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Content-Type must be application/json");
}

#[tokio::test]
async fn test_malformed_json() {
    let harness = TestHarness::memory().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/equation")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"a\": 1,"))
        .unwrap();

    let (status, body) = harness.send_request(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request body must be valid JSON");
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let harness = TestHarness::memory().await;
    let id = harness.create(1.0, -5.0, 6.0).await;

    let (status, body) = harness
        .put(&format!("/api/equation/{id}"), json!({ "a": 1, "b": 2 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields: c");

    let (_, fetched) = harness.get(&format!("/api/equation/{id}")).await;
    assert_eq!(fetched["data"]["solution_type"], "two_real");
}

#[tokio::test]
async fn test_failed_validation_stores_nothing() {
    let harness = TestHarness::memory().await;
    harness.post("/api/equation", json!({ "a": "x", "b": 1, "c": 1 })).await;

    let (_, body) = harness.get("/api/equation").await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_discriminant_overflow_rejected() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness
        .post("/api/equation", json!({ "a": 1e300, "b": 1e300, "c": 1 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], equa_core::DISCRIMINANT_OVERFLOW_MESSAGE);

    let (_, listed) = harness.get("/api/equation").await;
    assert_eq!(listed["count"], 0);
}
