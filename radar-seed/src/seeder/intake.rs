//! Newsletter subscriptions and research-request submissions

use super::Seeder;
use crate::error::SeedResult;
use radar_common::ids::{entity_seed, generate_id_string};
use radar_common::Snapshot;
use std::collections::HashSet;
use tracing::{info, warn};

impl Seeder<'_> {
    pub(super) async fn seed_intake(&mut self, snapshot: &Snapshot) -> SeedResult<()> {
        let mut tx = self.pool.begin().await?;

        let mut seen = HashSet::new();
        let mut subscriptions = 0i64;
        for sub in &snapshot.newsletter_subscriptions {
            let email = sub.email.trim().to_lowercase();
            if email.is_empty() {
                warn!("Skipping newsletter subscription with empty email");
                continue;
            }
            if !seen.insert(email.clone()) {
                warn!("Skipping duplicate newsletter subscription {}", sub.email);
                continue;
            }

            sqlx::query(
                "INSERT INTO newsletter_subscriptions (id, email, source, subscribed_at) VALUES (?, ?, ?, ?)",
            )
            .bind(generate_id_string(&entity_seed("subscription", &email)))
            .bind(&email)
            .bind(&sub.source)
            .bind(&sub.subscribed_at)
            .execute(&mut *tx)
            .await?;
            subscriptions += 1;
        }

        for request in &snapshot.research_requests {
            let id = self.maps.requests.register_unique(&request.id)?;
            sqlx::query(
                r#"
                INSERT INTO research_requests (
                    id, source_id, name, email, protocol_name, website, message, status, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&request.id)
            .bind(&request.name)
            .bind(&request.email)
            .bind(&request.protocol_name)
            .bind(&request.website)
            .bind(&request.message)
            .bind(&request.status)
            .bind(&request.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let requests = snapshot.research_requests.len() as i64;
        self.report.record("newsletter_subscriptions", subscriptions);
        self.report.record("research_requests", requests);
        info!(
            "Seeded {} newsletter subscriptions, {} research requests",
            subscriptions, requests
        );
        Ok(())
    }
}
