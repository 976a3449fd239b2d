//! Common test utilities and harness for equa-api integration tests.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use equa_api::{ServerConfig, Server};
use equa_core::{Equation, EquationId};
use equa_storage::{DatabaseConfig, EquationStats, EquationStore, MemoryStore, SqliteStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Test harness wrapping a router and the store behind it.
pub struct TestHarness {
    /// Router under test.
    pub router: Router,
    /// Store the router writes to.
    pub store: Arc<dyn EquationStore>,
}

impl TestHarness {
    /// Harness over an empty in-memory store.
    pub async fn memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new())).await
    }

    /// Harness over a private in-memory SQLite database.
    pub async fn sqlite() -> Self {
        let store = SqliteStore::connect(&DatabaseConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        Self::with_store(Arc::new(store)).await
    }

    /// Harness whose store fails every call.
    pub async fn failing() -> Self {
        let store: Arc<dyn EquationStore> = Arc::new(FailingStore);
        let server = Server::new(ServerConfig::default(), store.clone());
        Self {
            router: server.router(),
            store,
        }
    }

    /// Harness over an arbitrary store, with the schema prepared.
    pub async fn with_store(store: Arc<dyn EquationStore>) -> Self {
        let server = Server::new(ServerConfig::default(), store.clone());
        server.prepare().await.unwrap();
        Self {
            router: server.router(),
            store,
        }
    }

    /// Sends a request and returns the status and decoded JSON body.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    /// Sends a prepared request.
    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// `GET uri`
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    /// `POST uri` with a JSON body.
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// `PUT uri` with a JSON body.
    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    /// `DELETE uri`
    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Creates one equation and returns its id.
    pub async fn create(&self, a: f64, b: f64, c: f64) -> i64 {
        let (status, body) = self
            .post("/api/equation", serde_json::json!({ "a": a, "b": b, "c": c }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_i64().unwrap()
    }
}

/// A store whose every operation reports a pool timeout.
pub struct FailingStore;

fn unavailable() -> equa_storage::Error {
    equa_storage::Error::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl EquationStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn init_schema(&self) -> equa_storage::Result<()> {
        Err(unavailable())
    }

    async fn ping(&self) -> equa_storage::Result<i64> {
        Err(unavailable())
    }

    async fn insert(&self, _equation: Equation) -> equa_storage::Result<Equation> {
        Err(unavailable())
    }

    async fn get(&self, _id: EquationId) -> equa_storage::Result<Option<Equation>> {
        Err(unavailable())
    }

    async fn list(&self) -> equa_storage::Result<Vec<Equation>> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _id: EquationId,
        _equation: &Equation,
    ) -> equa_storage::Result<Option<Equation>> {
        Err(unavailable())
    }

    async fn delete(&self, _id: EquationId) -> equa_storage::Result<Option<Equation>> {
        Err(unavailable())
    }

    async fn stats(&self) -> equa_storage::Result<EquationStats> {
        Err(unavailable())
    }
}
