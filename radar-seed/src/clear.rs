//! Table-clearing routine
//!
//! Deletes every row from every seeded table, children before parents, inside
//! one transaction. A failing statement rolls the whole clear back: the store
//! is either fully cleared or untouched. `schema_version` is never cleared.

use crate::error::{SeedError, SeedResult};
use radar_common::db::TABLES;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Clear all destination tables; returns the number of rows deleted
pub async fn clear_all_tables(pool: &SqlitePool) -> SeedResult<u64> {
    info!("=== Clearing destination tables ===");

    let mut tx = pool.begin().await?;
    let mut deleted = 0u64;

    for spec in TABLES.iter().rev() {
        let result = sqlx::query(&format!("DELETE FROM {}", spec.name))
            .execute(&mut *tx)
            .await
            .map_err(|source| SeedError::Clear {
                table: spec.name,
                source,
            })?;

        debug!("Cleared {} ({} rows)", spec.name, result.rows_affected());
        deleted += result.rows_affected();
    }

    tx.commit().await?;

    info!("Cleared {} tables ({} rows)", TABLES.len(), deleted);
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_common::db::{create_schema, table_row_counts};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .unwrap();
        create_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_clear_respects_foreign_keys() {
        let pool = setup_test_db().await;

        sqlx::query("INSERT INTO users (id, source_id, email, name, role) VALUES ('u', 'u1', 'a@b.c', 'Ana', 'admin')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO articles (id, source_id, slug, title, author_id, status) VALUES ('a', 'a1', 'aave', 'Aave', 'u', 'published')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO comments (id, source_id, article_id, content, depth) VALUES ('c', 'c1', 'a', 'hi', 0)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO comments (id, source_id, article_id, parent_id, content, depth) VALUES ('r', 'r1', 'a', 'c', 'reply', 1)")
            .execute(&pool)
            .await
            .unwrap();

        let deleted = clear_all_tables(&pool).await.unwrap();

        assert_eq!(deleted, 4);
        let counts = table_row_counts(&pool).await.unwrap();
        assert!(counts.iter().all(|t| t.row_count == 0));
    }

    #[tokio::test]
    async fn test_clear_empty_store_is_noop() {
        let pool = setup_test_db().await;
        assert_eq!(clear_all_tables(&pool).await.unwrap(), 0);
        assert_eq!(clear_all_tables(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clear_failure_rolls_back() {
        let pool = setup_test_db().await;

        sqlx::query("INSERT INTO tags (id, name) VALUES ('t', 'DeFi')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO system_metadata (key, value) VALUES ('seeded_at', 'x')")
            .execute(&pool)
            .await
            .unwrap();

        // Break one table in the middle of the clear order
        sqlx::query("DROP TABLE protocol_section_copy")
            .execute(&pool)
            .await
            .unwrap();

        let err = clear_all_tables(&pool).await.unwrap_err();
        assert!(matches!(err, SeedError::Clear { table: "protocol_section_copy", .. }));

        // system_metadata is cleared before protocol_section_copy; rollback restores it
        let metadata: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM system_metadata")
            .fetch_one(&pool)
            .await
            .unwrap();
        let tags: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(metadata, 1);
        assert_eq!(tags, 1);
    }
}
