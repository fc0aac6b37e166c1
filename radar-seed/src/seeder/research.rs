use super::Seeder;
use crate::error::SeedResult;
use radar_common::parsers::parse_opinion_count;
use radar_common::snapshot::ResearchCard;
use std::collections::HashSet;
use tracing::info;

impl Seeder<'_> {
    pub(super) async fn seed_research_cards(&mut self, cards: &[ResearchCard]) -> SeedResult<()> {
        for card in cards {
            self.seed_research_card(card).await?;
        }
        info!("Seeded {} research cards", cards.len());
        Ok(())
    }

    async fn seed_research_card(&mut self, card: &ResearchCard) -> SeedResult<()> {
        let article_id = match &card.article_id {
            Some(article) => Some(self.maps.articles.resolve("research card", &card.id, article)?),
            None => None,
        };
        let id = self.maps.research_cards.register_unique(&card.id)?;

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO research_cards (
                id, source_id, article_id, title, summary, category, image_url,
                opinion_count, opinion_text, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&card.id)
        .bind(&article_id)
        .bind(&card.title)
        .bind(&card.summary)
        .bind(&card.category)
        .bind(&card.image_url)
        .bind(parse_opinion_count(card.opinion_count.as_deref()))
        .bind(&card.opinion_count)
        .bind(&card.created_at)
        .execute(&mut *tx)
        .await?;

        let mut seen = HashSet::new();
        let mut order_index = 0i64;
        for name in card.tags.iter().filter(|n| !n.trim().is_empty()) {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let tag_id = self.maps.tags.resolve("research card", &card.id, name)?;
            order_index += 1;
            sqlx::query(
                "INSERT INTO research_card_tags (research_card_id, tag_id, order_index) VALUES (?, ?, ?)",
            )
            .bind(&id)
            .bind(&tag_id)
            .bind(order_index)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        self.report.record("research_cards", 1);
        self.report.record("research_card_tags", order_index);
        Ok(())
    }
}
