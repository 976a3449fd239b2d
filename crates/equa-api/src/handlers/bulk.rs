//! Collection-level endpoints under `/api/equations`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use equa_core::{Coefficients, Equation};
use serde_json::{Value, json};

use super::json_body;
use crate::response::{ApiError, ApiResult, Envelope};
use crate::state::AppState;

/// `POST /api/equations/bulk`
///
/// Items are validated and stored independently; a bad item is reported in
/// `errors` with its index and does not stop the rest.
pub async fn create_bulk(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> ApiResult {
    let payload = json_body(&headers, &body)?;
    let Some(items) = payload.get("equations").and_then(Value::as_array) else {
        return Err(ApiError::bad_request("Request must contain an 'equations' array"));
    };

    let mut created: Vec<Value> = Vec::new();
    let mut errors: Vec<Value> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let coefficients = match Coefficients::from_json(item) {
            Ok(c) => c,
            Err(err) => {
                errors.push(item_error(index, &ApiError::from(err)));
                continue;
            }
        };

        match state.store.insert(Equation::from_coefficients(coefficients)).await {
            Ok(saved) => created.push(json!(saved.to_record())),
            Err(err) => {
                tracing::warn!(index, error = %err, retryable = err.is_retryable(), "bulk item not stored");
                errors.push(json!({
                    "index": index,
                    "message": "Equation solved but database save failed",
                    "error": err.to_string(),
                }));
            }
        }
    }

    tracing::info!(created = created.len(), errors = errors.len(), "bulk create finished");

    let message = format!("Created {} equations with {} errors", created.len(), errors.len());
    let envelope = if created.is_empty() {
        Envelope::error(StatusCode::BAD_REQUEST, message)
    } else {
        Envelope::success(message).with_status(StatusCode::CREATED)
    };

    Ok(envelope
        .field("created_count", json!(created.len()))
        .field("error_count", json!(errors.len()))
        .field("created_equations", Value::Array(created))
        .field("errors", Value::Array(errors)))
}

/// Per-item error entry, worded like the single-item endpoint would answer.
fn item_error(index: usize, err: &ApiError) -> Value {
    let mut entry = json!({ "index": index, "message": err.message() });
    if let Some(detail) = err.detail() {
        entry["error"] = Value::String(detail.to_string());
    }
    entry
}

/// `GET /api/equations/stats`
pub async fn stats(State(state): State<AppState>) -> ApiResult {
    let stats = state
        .store
        .stats()
        .await
        .map_err(|e| ApiError::internal("Failed to compute statistics", e))?;

    Ok(Envelope::success("Statistics retrieved successfully").field("stats", json!(stats)))
}
