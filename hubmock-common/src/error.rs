//! Common error types for the HUB mock server

use thiserror::Error;

/// Common result type for HUB mock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the HUB mock server
///
/// Mock handlers themselves are infallible (every request path returns an
/// HTTP 200 envelope); these variants only surface from bootstrap paths
/// such as configuration resolution and socket binding.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
