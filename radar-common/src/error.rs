//! Common error types for Horizon Radar

use thiserror::Error;

/// Common result type for Horizon Radar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the seed tooling
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input in the source snapshot
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
