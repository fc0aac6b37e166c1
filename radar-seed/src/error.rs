//! Error types for radar-seed
//!
//! Parse and classification problems never surface here: they resolve to
//! zero values or default buckets. Everything below is fatal to the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    /// radar-common error (config, snapshot decoding, schema setup)
    #[error("Common error: {0}")]
    Common(#[from] radar_common::Error),

    /// Insert or transaction failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A table could not be cleared; nothing was deleted
    #[error("Failed to clear table {table}: {source}")]
    Clear {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A record names a parent that is not in the snapshot
    #[error("{entity} '{key}' references unknown {target} '{reference}'")]
    MissingReference {
        entity: &'static str,
        key: String,
        target: &'static str,
        reference: String,
    },

    /// Two records of the same kind share a source key
    #[error("Duplicate {entity} key '{key}' in snapshot")]
    DuplicateKey { entity: &'static str, key: String },
}

/// Result type for seed operations
pub type SeedResult<T> = Result<T, SeedError>;
