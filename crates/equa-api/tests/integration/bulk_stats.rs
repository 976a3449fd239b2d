//! Bulk creation and statistics.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestHarness;

#[tokio::test]
async fn test_bulk_mixed_items() {
    let harness = TestHarness::sqlite().await;
    let (status, body) = harness
        .post(
            "/api/equations/bulk",
            json!({
                "equations": [
                    { "a": 1, "b": -5, "c": 6 },
                    { "a": 1 },
                    { "a": 0, "b": 2, "c": -4 },
                    { "a": "bad", "b": 0, "c": 0 }
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Created 2 equations with 2 errors");
    assert_eq!(body["created_count"], 2);
    assert_eq!(body["error_count"], 2);
    assert_eq!(body["created_equations"][0]["solution_type"], "two_real");
    assert_eq!(body["created_equations"][1]["solution_type"], "linear");
    assert_eq!(body["errors"][0]["index"], 1);
    assert_eq!(body["errors"][0]["message"], "Missing required fields: b, c");
    assert_eq!(body["errors"][1]["index"], 3);
    assert_eq!(
        body["errors"][1]["message"],
        "Coefficients a, b, c must be valid numbers"
    );
    assert!(body["errors"][1]["error"].is_string());
}

#[tokio::test]
async fn test_bulk_all_invalid() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness
        .post("/api/equations/bulk", json!({ "equations": [{ "b": 1 }] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["created_count"], 0);
    assert_eq!(body["error_count"], 1);
}

#[tokio::test]
async fn test_bulk_requires_array() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness
        .post("/api/equations/bulk", json!({ "equations": { "a": 1 } }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request must contain an 'equations' array");
}

#[tokio::test]
async fn test_bulk_store_failures_reported_per_item() {
    let harness = TestHarness::failing().await;
    let (status, body) = harness
        .post(
            "/api/equations/bulk",
            json!({ "equations": [{ "a": 1, "b": 2, "c": 1 }] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_count"], 1);
    assert_eq!(body["errors"][0]["index"], 0);
    assert_eq!(
        body["errors"][0]["message"],
        "Equation solved but database save failed"
    );
    assert!(body["errors"][0]["error"].as_str().unwrap().contains("pool timed out"));
}

#[tokio::test]
async fn test_stats() {
    let harness = TestHarness::sqlite().await;
    harness.create(1.0, -5.0, 6.0).await;
    harness.create(1.0, -3.0, 2.0).await;
    let latest = harness.create(0.0, 2.0, -4.0).await;

    let (status, body) = harness.get("/api/equations/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Statistics retrieved successfully");

    let stats = &body["stats"];
    assert_eq!(stats["total_equations"], 3);
    assert_eq!(stats["by_solution_type"]["two_real"], 2);
    assert_eq!(stats["by_solution_type"]["linear"], 1);
    assert!(stats["by_solution_type"].get("complex").is_none());
    assert_eq!(stats["latest_equation"]["id"], latest);
}

#[tokio::test]
async fn test_stats_empty() {
    let harness = TestHarness::memory().await;
    let (status, body) = harness.get("/api/equations/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["total_equations"], 0);
    assert!(body["stats"]["latest_equation"].is_null());
}

#[tokio::test]
async fn test_stats_failure() {
    let harness = TestHarness::failing().await;
    let (status, body) = harness.get("/api/equations/stats").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to compute statistics");
}
