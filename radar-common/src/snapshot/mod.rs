//! Source snapshot model
//!
//! Serde types for the exported document store. Each top-level record
//! carries its related data inline (nested sequences and objects) instead of
//! foreign keys; the seed pipeline is responsible for decomposing it.
//!
//! Keys are camelCase to match the export format. Every collection defaults
//! to empty so partial exports still load.

mod article;
mod comment;
mod protocol;

pub use article::*;
pub use comment::*;
pub use protocol::*;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Complete document graph as returned by the store's export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub exported_at: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub research_cards: Vec<ResearchCard>,
    #[serde(default)]
    pub protocols: Vec<Protocol>,
    #[serde(default)]
    pub newsletter_subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub research_requests: Vec<ResearchRequest>,
}

impl Snapshot {
    /// Load a snapshot from a JSON export file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Snapshot file not found: {}",
                path.display()
            )));
        }

        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Err(Error::InvalidInput(format!(
                "Snapshot file is empty: {}",
                path.display()
            )));
        }
        let snapshot = Self::from_json(&raw)?;

        info!(
            "Loaded snapshot {}: {} users, {} articles, {} comments, {} research cards, {} protocols",
            path.display(),
            snapshot.users.len(),
            snapshot.articles.len(),
            snapshot.comments.len(),
            snapshot.research_cards.len(),
            snapshot.protocols.len()
        );

        Ok(snapshot)
    }

    /// Decode a snapshot from JSON text
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_role() -> String {
    "reader".to_string()
}

/// Summary card shown on the research index
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchCard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub article_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Display string such as "1,204"
    #[serde(default)]
    pub opinion_count: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub email: String,
    #[serde(default)]
    pub subscribed_at: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Research-request intake form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub protocol_name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_request_status")]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_request_status() -> String {
    "pending".to_string()
}

/// Content-detail tier under which an article keeps parallel variants
///
/// Articles use novice/technical/analyst; protocol copy uses
/// beginner/intermediate/advanced. Both vocabularies map onto the same three
/// tiers and are stored under the first vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadingLevel {
    Novice,
    Technical,
    Analyst,
}

impl ReadingLevel {
    /// Parse either vocabulary, case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "novice" | "beginner" => Some(ReadingLevel::Novice),
            "technical" | "intermediate" => Some(ReadingLevel::Technical),
            "analyst" | "advanced" => Some(ReadingLevel::Analyst),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::Novice => "novice",
            ReadingLevel::Technical => "technical",
            ReadingLevel::Analyst => "analyst",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_loads() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert!(snapshot.users.is_empty());
        assert!(snapshot.articles.is_empty());
        assert!(snapshot.version.is_none());
    }

    #[test]
    fn test_defaults_applied() {
        let snapshot = Snapshot::from_json(
            r#"{
                "users": [{"id": "u1", "email": "a@b.c", "name": "Ana"}],
                "researchRequests": [{
                    "id": "r1", "name": "Bo", "email": "bo@x.io", "protocolName": "Aave"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.users[0].role, "reader");
        assert_eq!(snapshot.research_requests[0].status, "pending");
    }

    #[test]
    fn test_load_rejects_empty_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(&path, "  \n").unwrap();

        assert!(matches!(Snapshot::load(&path), Err(Error::InvalidInput(_))));
        assert!(matches!(
            Snapshot::load(&dir.path().join("missing.json")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let result = Snapshot::from_json("{\"users\": [");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_reading_level_vocabularies() {
        assert_eq!(ReadingLevel::from_label("Novice"), Some(ReadingLevel::Novice));
        assert_eq!(ReadingLevel::from_label("beginner"), Some(ReadingLevel::Novice));
        assert_eq!(ReadingLevel::from_label("intermediate"), Some(ReadingLevel::Technical));
        assert_eq!(ReadingLevel::from_label("ADVANCED"), Some(ReadingLevel::Analyst));
        assert_eq!(ReadingLevel::from_label("expert"), None);
        assert_eq!(ReadingLevel::Analyst.as_str(), "analyst");
    }
}
