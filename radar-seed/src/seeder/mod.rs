//! Seed orchestrator
//!
//! Decomposes a [`Snapshot`] into the relational schema in dependency order:
//!
//! users → tags → articles (+ children) → comments (+ replies) →
//! research cards → protocols (+ chains, categories, section copy) →
//! newsletter subscriptions / research requests → system metadata
//!
//! Each top-level entity and its children are written in one transaction.
//! Nothing is read back from the database; parent ids come from [`IdMaps`].
//! The first error aborts the run.

mod articles;
mod comments;
mod intake;
mod metadata;
mod protocols;
mod research;
mod tags;
mod users;

use crate::error::SeedResult;
use crate::id_maps::IdMaps;
use crate::report::SeedReport;
use radar_common::Snapshot;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

pub struct Seeder<'a> {
    pool: &'a SqlitePool,
    maps: IdMaps,
    report: SeedReport,
}

impl<'a> Seeder<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pool,
            maps: IdMaps::default(),
            report: SeedReport::default(),
        }
    }

    /// Insert the whole snapshot; returns rows inserted per table
    pub async fn run(mut self, snapshot: &Snapshot) -> SeedResult<SeedReport> {
        info!("=== Seeding from snapshot ===");

        self.seed_users(&snapshot.users).await?;
        self.seed_tags(snapshot).await?;
        self.seed_articles(&snapshot.articles).await?;
        self.seed_comments(&snapshot.comments).await?;
        self.seed_research_cards(&snapshot.research_cards).await?;
        self.seed_protocols(&snapshot.protocols).await?;
        self.seed_intake(snapshot).await?;
        self.seed_metadata(snapshot).await?;

        for (family, rows) in self.report.family_totals() {
            info!("  {:<10} {:>6} rows", family.as_str(), rows);
        }
        info!("=== Seed complete: {} rows ===", self.report.total());

        Ok(self.report)
    }
}

/// Insert `(id, owner_id, order_index, <column>)` rows for a list of strings
///
/// `owner_column` and `column` are static schema names.
async fn insert_text_rows(
    conn: &mut SqliteConnection,
    table: &'static str,
    owner_column: &'static str,
    column: &'static str,
    owner_seed: &str,
    owner_id: &str,
    items: &[String],
) -> SeedResult<i64> {
    let sql = format!(
        "INSERT INTO {} (id, {}, order_index, {}) VALUES (?, ?, ?, ?)",
        table, owner_column, column
    );

    for (position, text) in items.iter().enumerate() {
        let order_index = position + 1;
        let id = row_id(owner_seed, table, order_index);
        sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .bind(order_index as i64)
            .bind(text)
            .execute(&mut *conn)
            .await?;
    }

    Ok(items.len() as i64)
}

/// Deterministic id for the `order_index`-th child row of a parent
fn row_id(owner_seed: &str, table: &str, order_index: usize) -> String {
    radar_common::ids::generate_id_string(&radar_common::ids::child_seed(
        owner_seed,
        table,
        order_index,
    ))
}
