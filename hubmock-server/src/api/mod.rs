//! HTTP API handlers for hubmock-server

pub mod health;
pub mod import;
pub mod search;

pub use health::health_routes;
pub use import::{import_routes, IMPORT_ENDPOINTS};
pub use search::search_routes;
