//! Article rows and their nested collections
//!
//! Every child row carries `order_index` (1-based) in source order. One-to-one
//! blocks (tokenomics, radar rating, stats, problem/users/value) are keyed by
//! `article_id` alone.

use super::{insert_text_rows, row_id, Seeder};
use crate::error::SeedResult;
use crate::id_maps::IdMap;
use radar_common::classify::{classify_link, normalize_event_type};
use radar_common::parsers::{parse_money_string, parse_user_count};
use radar_common::snapshot::{Article, ContentSection, ReadingLevel};
use sqlx::SqliteConnection;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

impl Seeder<'_> {
    pub(super) async fn seed_articles(&mut self, articles: &[Article]) -> SeedResult<()> {
        for article in articles {
            self.seed_article(article).await?;
        }
        info!("Seeded {} articles", articles.len());
        Ok(())
    }

    async fn seed_article(&mut self, article: &Article) -> SeedResult<()> {
        let author_id = match &article.author_id {
            Some(author) => Some(self.maps.users.resolve("article", &article.id, author)?),
            None => None,
        };
        let article_id = self.maps.articles.register_unique(&article.id)?;
        let seed = self.maps.articles.seed_for(&article.id);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO articles (
                id, source_id, slug, title, subtitle, category, author_id, status,
                featured, read_time, cover_image, published_at, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&article_id)
        .bind(&article.id)
        .bind(&article.slug)
        .bind(&article.title)
        .bind(&article.subtitle)
        .bind(&article.category)
        .bind(&author_id)
        .bind(&article.status)
        .bind(article.featured)
        .bind(&article.read_time)
        .bind(&article.cover_image)
        .bind(&article.published_at)
        .bind(&article.created_at)
        .bind(&article.updated_at)
        .execute(&mut *tx)
        .await?;
        self.report.record("articles", 1);

        let conn: &mut SqliteConnection = &mut tx;
        let ctx = ArticleCtx { seed: &seed, id: &article_id };

        let n = insert_tag_links(conn, "article_tags", &ctx, &self.maps.tags, &article.tags).await?;
        self.report.record("article_tags", n);

        let n = insert_text_rows(
            conn,
            "article_abstracts",
            "article_id",
            "paragraph",
            ctx.seed,
            ctx.id,
            &article.abstract_paragraphs,
        )
        .await?;
        self.report.record("article_abstracts", n);

        for (table, blocks) in [
            ("article_architecture_sections", &article.architecture),
            ("article_mechanics", &article.mechanics),
        ] {
            for (position, block) in blocks.iter().enumerate() {
                let order_index = position + 1;
                sqlx::query(&format!(
                    "INSERT INTO {} (id, article_id, order_index, title, description) VALUES (?, ?, ?, ?, ?)",
                    table
                ))
                .bind(row_id(ctx.seed, table, order_index))
                .bind(ctx.id)
                .bind(order_index as i64)
                .bind(&block.title)
                .bind(&block.description)
                .execute(&mut *conn)
                .await?;
            }
            self.report.record(table, blocks.len() as i64);
        }

        for (position, member) in article.team.iter().enumerate() {
            let order_index = position + 1;
            sqlx::query(
                r#"
                INSERT INTO article_team_members (id, article_id, order_index, name, role, bio, avatar, twitter)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(row_id(ctx.seed, "article_team_members", order_index))
            .bind(ctx.id)
            .bind(order_index as i64)
            .bind(&member.name)
            .bind(&member.role)
            .bind(&member.bio)
            .bind(&member.avatar)
            .bind(&member.twitter)
            .execute(&mut *conn)
            .await?;
        }
        self.report.record("article_team_members", article.team.len() as i64);

        for (position, event) in article.events.iter().enumerate() {
            let order_index = position + 1;
            let normalized = normalize_event_type(&event.title);
            sqlx::query(
                r#"
                INSERT INTO article_events (id, article_id, order_index, event_type, title, event_date)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(row_id(ctx.seed, "article_events", order_index))
            .bind(ctx.id)
            .bind(order_index as i64)
            .bind(normalized.kind.as_str())
            .bind(&normalized.title)
            .bind(&event.date)
            .execute(&mut *conn)
            .await?;
        }
        self.report.record("article_events", article.events.len() as i64);

        for (position, link) in article.links.iter().enumerate() {
            let order_index = position + 1;
            let class = classify_link(
                link.platform.as_deref().unwrap_or_default(),
                link.link_type.as_deref().unwrap_or_default(),
            );
            sqlx::query(
                r#"
                INSERT INTO article_links (id, article_id, order_index, link_group, kind, url, label)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(row_id(ctx.seed, "article_links", order_index))
            .bind(ctx.id)
            .bind(order_index as i64)
            .bind(class.group.as_str())
            .bind(&class.kind)
            .bind(&link.url)
            .bind(&link.label)
            .execute(&mut *conn)
            .await?;
        }
        self.report.record("article_links", article.links.len() as i64);

        let n = insert_tag_links(
            conn,
            "article_ecosystem_tags",
            &ctx,
            &self.maps.tags,
            &article.ecosystem,
        )
        .await?;
        self.report.record("article_ecosystem_tags", n);

        for (position, credential) in article.credentials.iter().enumerate() {
            let order_index = position + 1;
            sqlx::query(
                "INSERT INTO article_credentials (id, article_id, order_index, label, value) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(row_id(ctx.seed, "article_credentials", order_index))
            .bind(ctx.id)
            .bind(order_index as i64)
            .bind(&credential.label)
            .bind(&credential.value)
            .execute(&mut *conn)
            .await?;
        }
        self.report.record("article_credentials", article.credentials.len() as i64);

        if let Some(tokenomics) = &article.tokenomics {
            sqlx::query("INSERT INTO article_tokenomics (article_id, total_supply) VALUES (?, ?)")
                .bind(ctx.id)
                .bind(&tokenomics.total_supply)
                .execute(&mut *conn)
                .await?;
            self.report.record("article_tokenomics", 1);

            for (position, allocation) in tokenomics.allocations.iter().enumerate() {
                let order_index = position + 1;
                sqlx::query(
                    r#"
                    INSERT INTO article_tokenomics_allocations (id, article_id, order_index, label, percentage, color)
                    VALUES (?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(row_id(ctx.seed, "article_tokenomics_allocations", order_index))
                .bind(ctx.id)
                .bind(order_index as i64)
                .bind(&allocation.label)
                .bind(allocation.percentage)
                .bind(&allocation.color)
                .execute(&mut *conn)
                .await?;
            }
            self.report.record(
                "article_tokenomics_allocations",
                tokenomics.allocations.len() as i64,
            );
        }

        if let Some(content) = &article.content {
            let n = insert_content_sections(conn, &ctx, &article.id, content).await?;
            self.report.record("article_content_sections", n);
        }

        for (position, image) in article.images.iter().enumerate() {
            let order_index = position + 1;
            sqlx::query(
                r#"
                INSERT INTO article_images (id, article_id, order_index, url, caption, after_section)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(row_id(ctx.seed, "article_images", order_index))
            .bind(ctx.id)
            .bind(order_index as i64)
            .bind(&image.url)
            .bind(&image.caption)
            .bind(&image.after_section)
            .execute(&mut *conn)
            .await?;
        }
        self.report.record("article_images", article.images.len() as i64);

        for (position, entry) in article.table_of_contents.iter().enumerate() {
            let order_index = position + 1;
            sqlx::query(
                r#"
                INSERT INTO article_toc_entries (id, article_id, order_index, anchor, title, level)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(row_id(ctx.seed, "article_toc_entries", order_index))
            .bind(ctx.id)
            .bind(order_index as i64)
            .bind(&entry.anchor)
            .bind(&entry.title)
            .bind(entry.level)
            .execute(&mut *conn)
            .await?;
        }
        self.report.record("article_toc_entries", article.table_of_contents.len() as i64);

        if let Some(rating) = &article.radar_rating {
            sqlx::query(
                r#"
                INSERT INTO article_radar_ratings (article_id, overall, technology, team, tokenomics, adoption, risk)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(ctx.id)
            .bind(rating.overall)
            .bind(rating.technology)
            .bind(rating.team)
            .bind(rating.tokenomics)
            .bind(rating.adoption)
            .bind(rating.risk)
            .execute(&mut *conn)
            .await?;
            self.report.record("article_radar_ratings", 1);
        }

        if let Some(stats) = &article.stats {
            let tvl = parse_money_string(stats.tvl.as_deref());
            let users = parse_user_count(stats.users.as_deref());
            let transactions = parse_user_count(stats.transactions.as_deref());
            let market_cap = parse_money_string(stats.market_cap.as_deref());

            sqlx::query(
                r#"
                INSERT INTO article_stats (
                    article_id, tvl_usd, tvl_text, users_count, users_text,
                    transactions_count, transactions_text, market_cap_usd, market_cap_text
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(ctx.id)
            .bind(tvl.numeric)
            .bind(&tvl.text)
            .bind(users.count)
            .bind(&users.text)
            .bind(transactions.count)
            .bind(&transactions.text)
            .bind(market_cap.numeric)
            .bind(&market_cap.text)
            .execute(&mut *conn)
            .await?;
            self.report.record("article_stats", 1);
        }

        if let Some(puv) = &article.problem_users_value {
            sqlx::query(
                "INSERT INTO article_problem_users_value (article_id, problem, users, value) VALUES (?, ?, ?, ?)",
            )
            .bind(ctx.id)
            .bind(&puv.problem)
            .bind(&puv.users)
            .bind(&puv.value)
            .execute(&mut *conn)
            .await?;
            self.report.record("article_problem_users_value", 1);

            for (table, items) in [
                ("article_problems", &puv.problems),
                ("article_user_segments", &puv.user_segments),
                ("article_value_props", &puv.value_props),
            ] {
                let n = insert_text_rows(conn, table, "article_id", "text", ctx.seed, ctx.id, items)
                    .await?;
                self.report.record(table, n);
            }
        }

        tx.commit().await?;
        debug!("Article {} -> {}", article.id, article_id);
        Ok(())
    }
}

struct ArticleCtx<'a> {
    seed: &'a str,
    id: &'a str,
}

/// Link an article to canonical tags, skipping blanks and repeats
async fn insert_tag_links(
    conn: &mut SqliteConnection,
    table: &'static str,
    ctx: &ArticleCtx<'_>,
    tags: &IdMap,
    names: &[String],
) -> SeedResult<i64> {
    let sql = format!(
        "INSERT INTO {} (article_id, tag_id, order_index) VALUES (?, ?, ?)",
        table
    );
    let mut seen = HashSet::new();
    let mut inserted = 0i64;

    for name in names.iter().filter(|n| !n.trim().is_empty()) {
        if !seen.insert(name.as_str()) {
            continue;
        }
        let tag_id = tags.resolve(table, ctx.id, name)?;
        inserted += 1;
        sqlx::query(&sql)
            .bind(ctx.id)
            .bind(tag_id)
            .bind(inserted)
            .execute(&mut *conn)
            .await?;
    }

    Ok(inserted)
}

/// Content sections per reading level; `order_index` restarts per level
async fn insert_content_sections(
    conn: &mut SqliteConnection,
    ctx: &ArticleCtx<'_>,
    source_id: &str,
    content: &BTreeMap<String, Vec<ContentSection>>,
) -> SeedResult<i64> {
    let mut levels: Vec<(ReadingLevel, &Vec<ContentSection>)> = Vec::new();
    for (label, sections) in content {
        match ReadingLevel::from_label(label) {
            Some(level) if levels.iter().any(|(l, _)| *l == level) => warn!(
                "Article {}: skipping '{}', reading level {} already present",
                source_id,
                label,
                level.as_str()
            ),
            Some(level) => levels.push((level, sections)),
            None => warn!(
                "Article {}: skipping content under unknown reading level '{}'",
                source_id, label
            ),
        }
    }
    levels.sort_by_key(|(level, _)| *level);

    let mut inserted = 0i64;
    for (level, sections) in levels {
        let level_seed = format!("{}:{}", ctx.seed, level.as_str());
        for (position, section) in sections.iter().enumerate() {
            let order_index = position + 1;
            sqlx::query(
                r#"
                INSERT INTO article_content_sections (id, article_id, reading_level, order_index, heading, body)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(row_id(&level_seed, "article_content_sections", order_index))
            .bind(ctx.id)
            .bind(level.as_str())
            .bind(order_index as i64)
            .bind(&section.heading)
            .bind(&section.body)
            .execute(&mut *conn)
            .await?;
            inserted += 1;
        }
    }

    Ok(inserted)
}
