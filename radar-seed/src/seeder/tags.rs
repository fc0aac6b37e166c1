//! Canonical tag vocabulary
//!
//! Tags are deduplicated by exact name across article tags, article
//! ecosystem tags, research-card tags and protocol categories, and inserted
//! once in first-seen order before anything that references them.

use super::Seeder;
use crate::error::SeedResult;
use radar_common::Snapshot;
use tracing::info;

/// Distinct tag names in first-seen order
pub(super) fn collect_tag_names(snapshot: &Snapshot) -> Vec<&str> {
    let article_tags = snapshot
        .articles
        .iter()
        .flat_map(|a| a.tags.iter().chain(a.ecosystem.iter()));
    let card_tags = snapshot.research_cards.iter().flat_map(|c| c.tags.iter());
    let categories = snapshot.protocols.iter().flat_map(|p| p.categories.iter());

    let mut seen = std::collections::HashSet::new();
    article_tags
        .chain(card_tags)
        .chain(categories)
        .map(String::as_str)
        .filter(|name| !name.trim().is_empty())
        .filter(|name| seen.insert(*name))
        .collect()
}

impl Seeder<'_> {
    pub(super) async fn seed_tags(&mut self, snapshot: &Snapshot) -> SeedResult<()> {
        let names = collect_tag_names(snapshot);
        let mut tx = self.pool.begin().await?;

        for name in &names {
            let (id, _) = self.maps.tags.register(name);
            sqlx::query("INSERT INTO tags (id, name) VALUES (?, ?)")
                .bind(&id)
                .bind(*name)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        self.report.record("tags", names.len() as i64);
        info!("Seeded {} tags", names.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_dedupes_across_sources() {
        let snapshot = Snapshot::from_json(
            r#"{
                "articles": [
                    {"id": "a1", "slug": "a", "title": "A", "tags": ["DeFi", "Lending"], "ecosystem": ["Ethereum"]},
                    {"id": "a2", "slug": "b", "title": "B", "tags": ["DeFi", ""]}
                ],
                "researchCards": [{"id": "r1", "title": "R", "tags": ["Lending", "L2"]}],
                "protocols": [{"slug": "aave", "name": "Aave", "categories": ["DeFi", "Money Market"]}]
            }"#,
        )
        .unwrap();

        assert_eq!(
            collect_tag_names(&snapshot),
            vec!["DeFi", "Lending", "Ethereum", "L2", "Money Market"]
        );
    }
}
