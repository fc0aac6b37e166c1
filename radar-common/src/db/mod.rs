//! Destination schema, initialization and inspection

pub mod init;
pub mod schema;
pub mod tables;

pub use init::*;
pub use schema::*;
pub use tables::*;
