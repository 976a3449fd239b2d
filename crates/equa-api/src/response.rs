//! JSON response envelope.
//!
//! Every endpoint answers with an object carrying `message` and `status`
//! (`success`, `error`, or `partial_success`) plus endpoint-specific fields.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use equa_core::{EquationId, INVALID_NUMBERS_MESSAGE, REQUIRED_FIELDS};
use serde_json::{Map, Value, json};

/// Outcome tag carried in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request fully succeeded.
    Success,
    /// The request failed.
    Error,
    /// The equation was solved but could not be stored.
    PartialSuccess,
}

impl Outcome {
    /// Wire form of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::PartialSuccess => "partial_success",
        }
    }
}

/// A response body under construction.
#[derive(Debug, Clone)]
pub struct Envelope {
    status: StatusCode,
    body: Map<String, Value>,
}

impl Envelope {
    fn new(status: StatusCode, outcome: Outcome, message: impl Into<String>) -> Self {
        let mut body = Map::new();
        body.insert("message".into(), Value::String(message.into()));
        body.insert("status".into(), Value::String(outcome.as_str().into()));
        Self { status, body }
    }

    /// `200` envelope with `status: "success"`.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, Outcome::Success, message)
    }

    /// `200` envelope with `status: "partial_success"`.
    pub fn partial(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, Outcome::PartialSuccess, message)
    }

    /// Error envelope with the given HTTP status.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, Outcome::Error, message)
    }

    /// Overrides the HTTP status.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Adds a top-level field.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.body.insert(key.to_string(), value);
        self
    }

    /// The HTTP status that will be sent.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status, Json(Value::Object(self.body))).into_response()
    }
}

/// Error side of a handler result.
#[derive(Debug, Clone)]
pub struct ApiError(Envelope);

impl ApiError {
    /// `400` with a plain message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(Envelope::error(StatusCode::BAD_REQUEST, message))
    }

    /// `404` for an unknown equation id (raw path text allowed).
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self(Envelope::error(
            StatusCode::NOT_FOUND,
            format!("Equation with ID {id} not found"),
        ))
    }

    /// `500` with a route-specific message and the underlying error text.
    pub fn internal(message: impl Into<String>, err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "request failed");
        Self(
            Envelope::error(StatusCode::INTERNAL_SERVER_ERROR, message)
                .field("error", Value::String(err.to_string())),
        )
    }

    /// Adds a top-level field to the error body.
    pub fn field(self, key: &str, value: Value) -> Self {
        Self(self.0.field(key, value))
    }

    /// The HTTP status that will be sent.
    pub fn status(&self) -> StatusCode {
        self.0.status()
    }

    /// The `message` field.
    pub fn message(&self) -> &str {
        self.0.body.get("message").and_then(Value::as_str).unwrap_or_default()
    }

    /// The `error` field carrying the underlying cause, if any.
    pub fn detail(&self) -> Option<&str> {
        self.0.body.get("error").and_then(Value::as_str)
    }
}

impl From<equa_core::Error> for ApiError {
    fn from(err: equa_core::Error) -> Self {
        if !err.is_client_error() {
            return ApiError::internal("Unexpected error", err);
        }
        match err {
            equa_core::Error::MissingFields(_) => {
                ApiError::bad_request(err.to_string()).field("required_fields", json!(REQUIRED_FIELDS))
            }
            equa_core::Error::Validation {
                field: Some(_),
                message,
            } => ApiError::bad_request(INVALID_NUMBERS_MESSAGE).field("error", Value::String(message)),
            equa_core::Error::Validation { field: None, message } => ApiError::bad_request(message),
            equa_core::Error::NotFound { id } => ApiError::not_found(id),
            other => ApiError::bad_request(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

/// Result type returned by handlers.
pub type ApiResult = std::result::Result<Envelope, ApiError>;

/// Parses an `{id}` path segment; anything but an integer is a `404`.
pub fn parse_id(raw: &str) -> std::result::Result<EquationId, ApiError> {
    raw.parse::<EquationId>().map_err(|_| ApiError::not_found(raw))
}
