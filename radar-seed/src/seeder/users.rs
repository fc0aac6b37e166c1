use super::Seeder;
use crate::error::SeedResult;
use radar_common::snapshot::User;
use tracing::{debug, info};

impl Seeder<'_> {
    pub(super) async fn seed_users(&mut self, users: &[User]) -> SeedResult<()> {
        let mut tx = self.pool.begin().await?;

        for user in users {
            let id = self.maps.users.register_unique(&user.id)?;

            sqlx::query(
                r#"
                INSERT INTO users (id, source_id, email, name, role, avatar, bio, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&user.id)
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.role)
            .bind(&user.avatar)
            .bind(&user.bio)
            .bind(&user.created_at)
            .execute(&mut *tx)
            .await?;

            debug!("User {} -> {}", user.id, id);
        }

        tx.commit().await?;
        self.report.record("users", users.len() as i64);
        info!("Seeded {} users", users.len());
        Ok(())
    }
}
