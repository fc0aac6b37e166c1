//! Comment threads
//!
//! Threads are walked depth-first with an explicit stack so any nesting depth
//! is accepted. Each node is inserted before its replies, so `parent_id`
//! always names a row that already exists. One transaction per thread.

use super::Seeder;
use crate::error::SeedResult;
use radar_common::snapshot::Comment;
use tracing::{debug, info};

impl Seeder<'_> {
    pub(super) async fn seed_comments(&mut self, threads: &[Comment]) -> SeedResult<()> {
        let mut total = 0i64;
        for root in threads {
            total += self.seed_thread(root).await?;
        }
        self.report.record("comments", total);
        info!("Seeded {} comments ({} threads)", total, threads.len());
        Ok(())
    }

    async fn seed_thread(&mut self, root: &Comment) -> SeedResult<i64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0i64;

        // (node, parent id, depth); replies pushed in reverse to keep source order
        let mut stack: Vec<(&Comment, Option<String>, i64)> = vec![(root, None, 0)];

        while let Some((comment, parent_id, depth)) = stack.pop() {
            let article_id = self
                .maps
                .articles
                .resolve("comment", &comment.id, &comment.article_id)?;
            let user_id = match &comment.user_id {
                Some(user) => Some(self.maps.users.resolve("comment", &comment.id, user)?),
                None => None,
            };
            let id = self.maps.comments.register_unique(&comment.id)?;

            sqlx::query(
                r#"
                INSERT INTO comments (
                    id, source_id, article_id, parent_id, user_id, author_name,
                    content, likes, depth, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&comment.id)
            .bind(&article_id)
            .bind(&parent_id)
            .bind(&user_id)
            .bind(&comment.author_name)
            .bind(&comment.content)
            .bind(comment.likes)
            .bind(depth)
            .bind(&comment.created_at)
            .execute(&mut *tx)
            .await?;
            inserted += 1;

            for reply in comment.replies.iter().rev() {
                stack.push((reply, Some(id.clone()), depth + 1));
            }
        }

        tx.commit().await?;
        debug!("Comment thread {} ({} nodes)", root.id, root.thread_size());
        Ok(inserted)
    }
}
