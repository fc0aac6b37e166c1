//! radar-seed: relational seeding from a document-store snapshot
//!
//! Clears the destination SQLite store and re-populates it from a JSON export,
//! decomposing nested article, comment and protocol data into normalized
//! tables with deterministic ids.

pub mod clear;
pub mod error;
pub mod id_maps;
pub mod report;
pub mod seeder;

pub use clear::clear_all_tables;
pub use error::{SeedError, SeedResult};
pub use report::SeedReport;
pub use seeder::Seeder;

use radar_common::Snapshot;
use sqlx::SqlitePool;
use tracing::info;

/// Clear (optionally) and seed `pool` from `snapshot`
///
/// With `clear` off the run fails on the first key that already exists.
pub async fn run_seed(pool: &SqlitePool, snapshot: &Snapshot, clear: bool) -> SeedResult<SeedReport> {
    if clear {
        clear_all_tables(pool).await?;
    } else {
        info!("Skipping table clear");
    }

    Seeder::new(pool).run(snapshot).await
}
