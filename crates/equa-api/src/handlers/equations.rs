//! Single-equation CRUD endpoints under `/api/equation`.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use equa_core::{Coefficients, Equation};
use serde_json::{Value, json};

use super::json_body;
use crate::response::{ApiError, ApiResult, Envelope, parse_id};
use crate::state::AppState;

/// `POST /api/equation`
///
/// A solved equation is still returned when storage fails, tagged
/// `partial_success` together with the storage error.
pub async fn create(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> ApiResult {
    let payload = json_body(&headers, &body)?;
    let coefficients = Coefficients::from_json(&payload)?;
    let equation = Equation::from_coefficients(coefficients);

    match state.store.insert(equation.clone()).await {
        Ok(saved) => {
            tracing::info!(
                id = ?saved.id(),
                solution_type = %saved.solution_type(),
                "equation created"
            );
            Ok(Envelope::success("Equation created and solved successfully")
                .with_status(StatusCode::CREATED)
                .field("data", json!(saved.to_record())))
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                retryable = err.is_retryable(),
                "equation solved but not stored"
            );
            Ok(Envelope::partial("Equation solved but database save failed")
                .field("data", json!(equation.to_record()))
                .field("database_error", Value::String(err.to_string())))
        }
    }
}

/// `GET /api/equation`
pub async fn list(State(state): State<AppState>) -> ApiResult {
    let equations = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::internal("Failed to retrieve equations", e))?;

    let data: Vec<Value> = equations.iter().map(|e| json!(e.to_record())).collect();
    Ok(Envelope::success(format!("Retrieved {} equations", data.len()))
        .field("count", json!(data.len()))
        .field("data", Value::Array(data)))
}

/// `GET /api/equation/{id}`
pub async fn show(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let id = parse_id(&raw_id)?;
    let equation = state
        .store
        .get(id)
        .await
        .map_err(|e| ApiError::internal("Failed to retrieve equation", e))?
        .ok_or_else(|| ApiError::not_found(id))?;

    Ok(Envelope::success("Equation retrieved successfully").field("data", json!(equation.to_record())))
}

/// `PUT /api/equation/{id}`
///
/// Re-solves with the new coefficients and reports the values it replaced.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult {
    let id = parse_id(&raw_id)?;
    let payload = json_body(&headers, &body)?;
    let coefficients = Coefficients::from_json(&payload)?;

    let previous = state
        .store
        .get(id)
        .await
        .map_err(|e| ApiError::internal("Failed to update equation", e))?
        .ok_or_else(|| ApiError::not_found(id))?;

    let mut changed = previous.clone();
    changed.set_coefficients(coefficients);

    let updated = state
        .store
        .update(id, &changed)
        .await
        .map_err(|e| ApiError::internal("Failed to update equation", e))?
        .ok_or_else(|| ApiError::not_found(id))?;

    tracing::info!(
        %id,
        from = %previous.solution_type(),
        to = %updated.solution_type(),
        "equation updated"
    );

    Ok(Envelope::success("Equation updated successfully")
        .field("data", json!(updated.to_record()))
        .field("previous_values", json!(previous.to_record())))
}

/// `DELETE /api/equation/{id}`
pub async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let id = parse_id(&raw_id)?;
    let removed = state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete equation", e))?
        .ok_or_else(|| ApiError::not_found(id))?;

    tracing::info!(%id, "equation deleted");
    Ok(Envelope::success(format!("Equation with ID {id} deleted successfully"))
        .field("deleted_equation", json!(removed.to_record())))
}
