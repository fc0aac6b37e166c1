use super::Seeder;
use crate::error::SeedResult;
use radar_common::db::TableFamily;
use radar_common::Snapshot;
use tracing::info;

/// Keys written regardless of snapshot content
const FIXED_KEYS: usize = 4;

impl Seeder<'_> {
    /// Record run provenance and per-family row counts
    ///
    /// `count.system` includes the metadata rows written here.
    pub(super) async fn seed_metadata(&mut self, snapshot: &Snapshot) -> SeedResult<()> {
        let rows_written = (FIXED_KEYS + TableFamily::ALL.len()) as i64;

        let mut entries: Vec<(String, String)> = vec![
            ("seeded_at".to_string(), chrono::Utc::now().to_rfc3339()),
            (
                "source_version".to_string(),
                snapshot.version.clone().unwrap_or_default(),
            ),
            (
                "source_exported_at".to_string(),
                snapshot.exported_at.clone().unwrap_or_default(),
            ),
            (
                "seed_tool_version".to_string(),
                env!("CARGO_PKG_VERSION").to_string(),
            ),
        ];

        let mut totals = self.report.family_totals();
        *totals.entry(TableFamily::System).or_insert(0) += rows_written;
        for (family, rows) in &totals {
            entries.push((format!("count.{}", family.as_str()), rows.to_string()));
        }

        let mut tx = self.pool.begin().await?;
        for (key, value) in &entries {
            sqlx::query(
                "INSERT INTO system_metadata (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)",
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        self.report.record("system_metadata", entries.len() as i64);
        info!("Recorded {} system metadata entries", entries.len());
        Ok(())
    }
}
