//! Shared fixtures for radar-seed integration tests
//!
//! - `fixture_snapshot`: small but complete snapshot touching every table family
//! - `TestDb`: temporary database with the schema applied

#![allow(dead_code)]

use radar_common::db::init_database;
use radar_common::Snapshot;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Temporary on-disk database; dropped with the directory
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("radar.db")).await.unwrap();
        Self { pool, _dir: dir }
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

pub fn fixture_json() -> Value {
    json!({
        "version": "2024.06",
        "exportedAt": "2024-06-01T12:00:00Z",
        "users": [
            {"id": "u1", "email": "ana@radar.io", "name": "Ana", "role": "admin"},
            {"id": "u2", "email": "bo@radar.io", "name": "Bo"}
        ],
        "articles": [{
            "id": "a1",
            "slug": "aave-deep-dive",
            "title": "Aave Deep Dive",
            "authorId": "u1",
            "status": "published",
            "featured": true,
            "tags": ["DeFi", "Lending"],
            "abstract": ["First paragraph.", "Second paragraph."],
            "architecture": [{"title": "Pools", "description": "Shared liquidity"}],
            "team": [{"name": "Stani", "role": "Founder"}],
            "events": [
                {"date": "2020-01", "title": "Mainnet launch"},
                {"date": "2023-03", "title": "Security audit by Foo"}
            ],
            "links": [
                {"platform": "Twitter", "type": "social", "url": "https://x.com/aave"},
                {"platform": "web", "type": "docs", "url": "https://docs.aave.com"}
            ],
            "ecosystem": ["Ethereum"],
            "tokenomics": {
                "totalSupply": "16M",
                "allocations": [{"label": "Community", "percentage": 60.0}]
            },
            "content": {
                "novice": [{"heading": "What", "body": "A lending market."}],
                "analyst": [{"heading": "Risk", "body": "Oracle risk."}]
            },
            "stats": {"tvl": "$12.5B", "users": "1,204", "marketCap": "$1.2b"}
        }],
        "comments": [{
            "id": "c1",
            "articleId": "a1",
            "userId": "u2",
            "authorName": "Bo",
            "content": "Great piece",
            "likes": 3,
            "replies": [{
                "id": "c2",
                "articleId": "a1",
                "userId": "u1",
                "authorName": "Ana",
                "content": "Thanks!"
            }]
        }],
        "researchCards": [{
            "id": "r1",
            "title": "Aave",
            "articleId": "a1",
            "opinionCount": "1,204 opinions",
            "tags": ["DeFi", "Money Market"]
        }],
        "protocols": [{
            "slug": "aave",
            "name": "Aave",
            "tvl": "$12.5B",
            "users": "1,204",
            "categories": ["DeFi", "Lending"],
            "chains": ["Ethereum", "Polygon"],
            "sections": {
                "overview": {"beginner": "Borrow and lend.", "advanced": "Over-collateralized CDPs."},
                "mechanics": {"deposit": {"novice": "Put tokens in."}}
            }
        }],
        "newsletterSubscriptions": [
            {"email": "reader@mail.com", "source": "footer"},
            {"email": "Reader@Mail.com", "source": "popup"}
        ],
        "researchRequests": [{
            "id": "req1",
            "name": "Cy",
            "email": "cy@mail.com",
            "protocolName": "Morpho"
        }]
    })
}

pub fn fixture_snapshot() -> Snapshot {
    serde_json::from_value(fixture_json()).unwrap()
}
