//! # equa-api
//!
//! HTTP API server for Equa.
//!
//! This crate provides:
//! - REST endpoints to create, list, fetch, update and delete equations
//! - Bulk creation and statistics endpoints
//! - Health and self-test endpoints (`/ping`, `/test-db`, `/test-equation`)
//! - The JSON response envelope and error-to-status mapping

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use routes::router;
pub use server::Server;
pub use state::AppState;
