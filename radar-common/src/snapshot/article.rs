//! Article documents and their embedded collections

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    /// Abstract paragraphs in reading order
    #[serde(default, rename = "abstract")]
    pub abstract_paragraphs: Vec<String>,
    #[serde(default)]
    pub architecture: Vec<TitledBlock>,
    #[serde(default)]
    pub mechanics: Vec<TitledBlock>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub events: Vec<ArticleEvent>,
    #[serde(default)]
    pub links: Vec<ArticleLink>,
    #[serde(default)]
    pub ecosystem: Vec<String>,
    #[serde(default)]
    pub credentials: Vec<Credential>,
    #[serde(default)]
    pub tokenomics: Option<Tokenomics>,
    /// Content sections keyed by reading-level label
    #[serde(default)]
    pub content: Option<BTreeMap<String, Vec<ContentSection>>>,
    #[serde(default)]
    pub images: Vec<ArticleImage>,
    #[serde(default)]
    pub table_of_contents: Vec<TocEntry>,
    #[serde(default)]
    pub radar_rating: Option<RadarRating>,
    #[serde(default)]
    pub stats: Option<ArticleStats>,
    #[serde(default)]
    pub problem_users_value: Option<ProblemUsersValue>,
}

fn default_status() -> String {
    "draft".to_string()
}

/// Heading plus prose, used by architecture and mechanics sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitledBlock {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleEvent {
    #[serde(default)]
    pub date: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleLink {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, rename = "type")]
    pub link_type: Option<String>,
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokenomics {
    #[serde(default)]
    pub total_supply: Option<String>,
    #[serde(default)]
    pub allocations: Vec<TokenAllocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenAllocation {
    pub label: String,
    pub percentage: f64,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSection {
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleImage {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    /// Heading of the content section the image follows
    #[serde(default)]
    pub after_section: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocEntry {
    pub anchor: String,
    pub title: String,
    #[serde(default = "default_toc_level")]
    pub level: i64,
}

fn default_toc_level() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarRating {
    pub overall: f64,
    #[serde(default)]
    pub technology: Option<f64>,
    #[serde(default)]
    pub team: Option<f64>,
    #[serde(default)]
    pub tokenomics: Option<f64>,
    #[serde(default)]
    pub adoption: Option<f64>,
    #[serde(default)]
    pub risk: Option<f64>,
}

/// Headline metrics as display strings ("$12.5M", "2.4K")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStats {
    #[serde(default)]
    pub tvl: Option<String>,
    #[serde(default)]
    pub users: Option<String>,
    #[serde(default)]
    pub transactions: Option<String>,
    #[serde(default)]
    pub market_cap: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemUsersValue {
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub users: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub problems: Vec<String>,
    #[serde(default)]
    pub user_segments: Vec<String>,
    #[serde(default)]
    pub value_props: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_nested_decode() {
        let article: Article = serde_json::from_str(
            r#"{
                "id": "a1",
                "slug": "aave-v3",
                "title": "Aave v3",
                "abstract": ["First.", "Second."],
                "links": [{"platform": "Twitter", "url": "https://x.com/aave"},
                          {"type": "Whitepaper", "url": "https://aave.com/wp.pdf"}],
                "content": {"novice": [{"heading": "Intro", "body": "Lending."}]},
                "tableOfContents": [{"anchor": "intro", "title": "Intro"}]
            }"#,
        )
        .unwrap();

        assert_eq!(article.status, "draft");
        assert_eq!(article.abstract_paragraphs, vec!["First.", "Second."]);
        assert_eq!(article.links[1].link_type.as_deref(), Some("Whitepaper"));
        assert_eq!(article.table_of_contents[0].level, 1);
        assert_eq!(article.content.unwrap()["novice"][0].heading, "Intro");
    }
}
