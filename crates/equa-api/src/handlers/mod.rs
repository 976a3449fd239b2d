//! Request handlers.

pub mod bulk;
pub mod equations;
pub mod health;

use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;

use crate::response::ApiError;

/// Decodes a JSON request body, insisting on a JSON content type.
pub(crate) fn json_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, ApiError> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false);
    if !is_json {
        return Err(ApiError::bad_request("Content-Type must be application/json"));
    }

    serde_json::from_slice(body).map_err(|e| {
        ApiError::bad_request("Request body must be valid JSON")
            .field("error", Value::String(e.to_string()))
    })
}
