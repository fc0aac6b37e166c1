//! # Horizon Radar Common Library
//!
//! Shared code for the Horizon Radar seed tooling including:
//! - Source snapshot model (the exported document store)
//! - Relational schema creation and inspection
//! - Deterministic id generation
//! - Value parsers and label classifiers
//! - Bootstrap configuration loading

pub mod classify;
pub mod config;
pub mod db;
pub mod error;
pub mod ids;
pub mod parsers;
pub mod snapshot;

pub use error::{Error, Result};
pub use snapshot::Snapshot;
