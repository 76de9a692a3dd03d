//! API module for the shared HTTP wire contract
//!
//! Contains the response envelope types and the canned-outcome mode
//! selector used by the hubmock-server handlers and their tests.
//!
//! # Design Principle
//!
//! This module contains ONLY pure types and pure functions — no HTTP
//! framework dependencies. The axum wiring lives in hubmock-server.

pub mod types;

pub use types::{
    CoaRecord, ImportErrorDetail, ImportResponse, Mode, ResponseStatus, SearchResponse,
};
