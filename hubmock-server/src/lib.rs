//! hubmock-server library - HUB mock endpoints
//!
//! Disposable mock of the HUB REST surface (chart-of-accounts search and
//! master-data imports) for integration testing. Stateless: every handler
//! is a pure function of (path, query parameters, body) with no memory
//! between calls, and every response is HTTP 200 with a canned envelope.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod counts;

/// Build application router
///
/// All routes are public; the mock carries no authentication. Request
/// logging comes from the tower-http trace layer.
pub fn build_router() -> Router {
    Router::new()
        .merge(api::import_routes())
        .merge(api::search_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
}
