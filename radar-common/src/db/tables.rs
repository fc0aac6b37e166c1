//! Table row-count queries

use super::schema::{TableFamily, TABLES};
use crate::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::BTreeMap;

/// Table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name
    pub name: String,
    /// Number of rows in table
    pub row_count: i64,
}

/// Row counts for every seeded table, in dependency order
pub async fn table_row_counts(pool: &SqlitePool) -> Result<Vec<TableInfo>> {
    let mut infos = Vec::with_capacity(TABLES.len());

    for spec in TABLES {
        // Table names come from the static schema list, never from input
        let row_count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", spec.name))
            .fetch_one(pool)
            .await?;

        infos.push(TableInfo {
            name: spec.name.to_string(),
            row_count,
        });
    }

    Ok(infos)
}

/// Row counts summed per table family
pub async fn family_row_counts(pool: &SqlitePool) -> Result<BTreeMap<TableFamily, i64>> {
    let mut totals: BTreeMap<TableFamily, i64> =
        TableFamily::ALL.iter().map(|f| (*f, 0)).collect();

    for (spec, info) in TABLES.iter().zip(table_row_counts(pool).await?) {
        *totals.entry(spec.family).or_insert(0) += info.row_count;
    }

    Ok(totals)
}
