//! Protocols, their chain and category associations, and section copy
//!
//! Chains and categories are shared across protocols: the row is inserted
//! the first time a name is seen and only the join row afterwards.
//! Categories point at the canonical tag of the same name.

use super::{row_id, Seeder};
use crate::error::SeedResult;
use radar_common::parsers::{parse_money_string, parse_user_count};
use radar_common::snapshot::Protocol;
use std::collections::HashSet;
use tracing::{debug, info};

impl Seeder<'_> {
    pub(super) async fn seed_protocols(&mut self, protocols: &[Protocol]) -> SeedResult<()> {
        for protocol in protocols {
            self.seed_protocol(protocol).await?;
        }
        info!(
            "Seeded {} protocols ({} chains, {} categories)",
            protocols.len(),
            self.maps.chains.len(),
            self.maps.categories.len()
        );
        Ok(())
    }

    async fn seed_protocol(&mut self, protocol: &Protocol) -> SeedResult<()> {
        let protocol_id = self.maps.protocols.register_unique(&protocol.slug)?;
        let seed = self.maps.protocols.seed_for(&protocol.slug);
        let tvl = parse_money_string(protocol.tvl.as_deref());
        let users = parse_user_count(protocol.users.as_deref());

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO protocols (
                id, slug, name, description, logo, website,
                tvl_usd, tvl_text, users_count, users_text, risk_level
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&protocol_id)
        .bind(&protocol.slug)
        .bind(&protocol.name)
        .bind(&protocol.description)
        .bind(&protocol.logo)
        .bind(&protocol.website)
        .bind(tvl.numeric)
        .bind(&tvl.text)
        .bind(users.count)
        .bind(&users.text)
        .bind(&protocol.risk_level)
        .execute(&mut *tx)
        .await?;
        self.report.record("protocols", 1);

        let mut seen = HashSet::new();
        let mut order_index = 0i64;
        for chain in protocol.chains.iter().filter(|c| !c.trim().is_empty()) {
            if !seen.insert(chain.as_str()) {
                continue;
            }
            let (chain_id, is_new) = self.maps.chains.register(chain);
            if is_new {
                sqlx::query("INSERT INTO chains (id, name) VALUES (?, ?)")
                    .bind(&chain_id)
                    .bind(chain)
                    .execute(&mut *tx)
                    .await?;
                self.report.record("chains", 1);
            }

            order_index += 1;
            sqlx::query(
                "INSERT INTO protocol_chain_map (protocol_id, chain_id, order_index) VALUES (?, ?, ?)",
            )
            .bind(&protocol_id)
            .bind(&chain_id)
            .bind(order_index)
            .execute(&mut *tx)
            .await?;
            self.report.record("protocol_chain_map", 1);
        }

        let mut seen = HashSet::new();
        let mut order_index = 0i64;
        for category in protocol.categories.iter().filter(|c| !c.trim().is_empty()) {
            if !seen.insert(category.as_str()) {
                continue;
            }
            let tag_id = self.maps.tags.resolve("protocol", &protocol.slug, category)?;
            let (category_id, is_new) = self.maps.categories.register(category);
            if is_new {
                sqlx::query("INSERT INTO protocol_categories (id, name, tag_id) VALUES (?, ?, ?)")
                    .bind(&category_id)
                    .bind(category)
                    .bind(&tag_id)
                    .execute(&mut *tx)
                    .await?;
                self.report.record("protocol_categories", 1);
            }

            order_index += 1;
            sqlx::query(
                "INSERT INTO protocol_category_map (protocol_id, category_id, order_index) VALUES (?, ?, ?)",
            )
            .bind(&protocol_id)
            .bind(&category_id)
            .bind(order_index)
            .execute(&mut *tx)
            .await?;
            self.report.record("protocol_category_map", 1);
        }

        let copy = protocol.section_copy();
        for (position, entry) in copy.iter().enumerate() {
            let order_index = position + 1;
            sqlx::query(
                r#"
                INSERT INTO protocol_section_copy (id, protocol_id, order_index, section_path, reading_level, content)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(row_id(&seed, "protocol_section_copy", order_index))
            .bind(&protocol_id)
            .bind(order_index as i64)
            .bind(&entry.section_path)
            .bind(entry.reading_level.map(|level| level.as_str()))
            .bind(&entry.content)
            .execute(&mut *tx)
            .await?;
        }
        self.report.record("protocol_section_copy", copy.len() as i64);

        tx.commit().await?;
        debug!("Protocol {} -> {}", protocol.slug, protocol_id);
        Ok(())
    }
}
