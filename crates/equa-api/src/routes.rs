//! Route table.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{bulk, equations, health};
use crate::state::AppState;

/// Builds the application router.
///
/// CORS is open to every origin; every request gets a tracing span.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(health::ping))
        .route("/test-db", get(health::test_db))
        .route("/create-tables", post(health::create_tables))
        .route("/test-equation", get(health::test_equation))
        .route("/api/equation", get(equations::list).post(equations::create))
        .route(
            "/api/equation/{id}",
            get(equations::show)
                .put(equations::update)
                .delete(equations::delete),
        )
        .route("/api/equations/bulk", post(bulk::create_bulk))
        .route("/api/equations/stats", get(bulk::stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
