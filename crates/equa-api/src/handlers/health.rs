//! Health and self-test endpoints.

use axum::extract::State;
use equa_core::Equation;
use serde_json::{Value, json};

use crate::response::{ApiError, ApiResult, Envelope};
use crate::state::AppState;

/// Equations solved by `GET /test-equation`, one per quadratic branch plus
/// the linear case.
pub const SELF_TEST_CASES: [(f64, f64, f64, &str); 4] = [
    (1.0, -5.0, 6.0, "Two real roots"),
    (1.0, -4.0, 4.0, "One repeated root"),
    (1.0, 0.0, 1.0, "Complex roots"),
    (0.0, 2.0, -4.0, "Linear equation"),
];

/// Summary of an equation used by the self-test endpoints.
pub(crate) fn summary(equation: &Equation) -> Value {
    json!({
        "equation": equation.equation_string(),
        "solution": equation.solution_text(),
        "solution_type": equation.solution_type(),
        "discriminant": equation.discriminant(),
    })
}

/// `GET /ping`
pub async fn ping() -> Envelope {
    Envelope::success("pong").field("database_configured", Value::Bool(true))
}

/// `GET /test-db`
#[tracing::instrument(skip_all)]
pub async fn test_db(State(state): State<AppState>) -> ApiResult {
    let database_url = Value::String(state.database.redacted_url());

    match state.store.ping().await {
        Ok(value) => Ok(Envelope::success("Database connection successful")
            .field("test_query_result", json!(value))
            .field("database_url", database_url)),
        Err(err) => Err(ApiError::internal("Database connection failed", err)
            .field("database_url", database_url)),
    }
}

/// `POST /create-tables`
#[tracing::instrument(skip_all)]
pub async fn create_tables(State(state): State<AppState>) -> ApiResult {
    state
        .store
        .init_schema()
        .await
        .map_err(|e| ApiError::internal("Failed to create database tables", e))?;

    let sample = Equation::new(1.0, -5.0, 6.0);
    tracing::info!(backend = state.store.backend(), "database tables created");

    Ok(Envelope::success("Database tables created successfully")
        .field("sample_equation", summary(&sample))
        .field("tables_created", json!(["equations"])))
}

/// `GET /test-equation`
pub async fn test_equation() -> Envelope {
    let results: Vec<Value> = SELF_TEST_CASES
        .iter()
        .map(|&(a, b, c, description)| {
            let mut result = summary(&Equation::new(a, b, c));
            result["description"] = Value::String(description.to_string());
            result
        })
        .collect();

    Envelope::success("Equation model test completed").field("test_results", Value::Array(results))
}
