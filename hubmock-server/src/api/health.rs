//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use hubmock_common::time;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub timestamp: String,
}

/// GET /health
///
/// Unconditional 200; consults no inputs. The timestamp lets callers
/// confirm they are talking to a live process rather than a cached reply.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "hubmock-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: time::rfc3339_now(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}
