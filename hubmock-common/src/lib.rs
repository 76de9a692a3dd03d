//! # HUB Mock Common Library
//!
//! Shared code for the HUB mock server including:
//! - API response envelope types (import, search)
//! - Canned-outcome mode selection
//! - Configuration resolution (listen port)
//! - Error types
//! - Timestamp utilities

pub mod api;
pub mod config;
pub mod error;
pub mod time;

pub use api::Mode;
pub use error::{Error, Result};
