//! Protocol documents and section-copy flattening

use super::ReadingLevel;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Money string such as "$1.2B"
    #[serde(default)]
    pub tvl: Option<String>,
    /// Abbreviated count such as "2.4K"
    #[serde(default)]
    pub users: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub chains: Vec<String>,
    /// Arbitrarily nested section copy, leaves keyed by reading level
    #[serde(default)]
    pub sections: Option<Value>,
}

/// One (dotted section path, reading level) copy entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCopy {
    pub section_path: String,
    /// `None` for string leaves not keyed by a reading level
    pub reading_level: Option<ReadingLevel>,
    pub content: String,
}

impl Protocol {
    /// Flatten `sections` into per-(path, level) copy entries
    ///
    /// `{"mechanics": {"deposit": {"novice": "..."}}}` yields path
    /// `mechanics.deposit` at level novice. A string under any other key is
    /// emitted with the key appended to the path and no level. Arrays and
    /// non-string scalars are skipped. Traversal follows source key order.
    /// A second label for a tier already present at the same path (e.g.
    /// `beginner` after `novice`) is skipped with a warning.
    pub fn section_copy(&self) -> Vec<SectionCopy> {
        let mut out = Vec::new();
        if let Some(Value::Object(map)) = &self.sections {
            for (key, value) in map {
                flatten_section(key, value, &mut out);
            }
        }
        out
    }
}

fn flatten_section(path: &str, value: &Value, out: &mut Vec<SectionCopy>) {
    let Value::Object(map) = value else {
        if let Value::String(text) = value {
            out.push(SectionCopy {
                section_path: path.to_string(),
                reading_level: None,
                content: text.clone(),
            });
        }
        return;
    };

    let mut levels: Vec<ReadingLevel> = Vec::new();
    for (key, child) in map {
        match (ReadingLevel::from_label(key), child) {
            (Some(level), Value::String(_)) if levels.contains(&level) => warn!(
                "Section {}: skipping '{}', reading level {} already present",
                path,
                key,
                level.as_str()
            ),
            (Some(level), Value::String(text)) => {
                levels.push(level);
                out.push(SectionCopy {
                    section_path: path.to_string(),
                    reading_level: Some(level),
                    content: text.clone(),
                });
            }
            _ => flatten_section(&format!("{}.{}", path, key), child, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn protocol_with_sections(sections: Value) -> Protocol {
        Protocol {
            slug: "aave".to_string(),
            name: "Aave".to_string(),
            description: None,
            logo: None,
            website: None,
            tvl: None,
            users: None,
            risk_level: None,
            categories: vec![],
            chains: vec![],
            sections: Some(sections),
        }
    }

    #[test]
    fn test_dotted_paths() {
        let protocol = protocol_with_sections(json!({
            "mechanics": {
                "deposit": {"novice": "Put money in.", "analyst": "Mint aTokens."}
            },
            "overview": {"beginner": "A lending market."}
        }));

        let copy = protocol.section_copy();
        assert_eq!(copy.len(), 3);
        assert!(copy.contains(&SectionCopy {
            section_path: "mechanics.deposit".to_string(),
            reading_level: Some(ReadingLevel::Analyst),
            content: "Mint aTokens.".to_string(),
        }));
        assert!(copy.contains(&SectionCopy {
            section_path: "mechanics.deposit".to_string(),
            reading_level: Some(ReadingLevel::Novice),
            content: "Put money in.".to_string(),
        }));
        assert!(copy.contains(&SectionCopy {
            section_path: "overview".to_string(),
            reading_level: Some(ReadingLevel::Novice),
            content: "A lending market.".to_string(),
        }));
    }

    #[test]
    fn test_plain_string_leaf_has_no_level() {
        let protocol = protocol_with_sections(json!({
            "risks": {"title": "Risks", "technical": "Oracle risk."}
        }));

        let copy = protocol.section_copy();
        assert_eq!(copy.len(), 2);
        assert!(copy.contains(&SectionCopy {
            section_path: "risks.title".to_string(),
            reading_level: None,
            content: "Risks".to_string(),
        }));
        assert!(copy.contains(&SectionCopy {
            section_path: "risks".to_string(),
            reading_level: Some(ReadingLevel::Technical),
            content: "Oracle risk.".to_string(),
        }));
    }

    #[test]
    fn test_source_key_order_kept() {
        let sections: Value = serde_json::from_str(
            r#"{
                "overview": {"novice": "What it is."},
                "mechanics": {"technical": "How it works."},
                "risks": {"analyst": "What can fail."}
            }"#,
        )
        .unwrap();

        let paths: Vec<String> = protocol_with_sections(sections)
            .section_copy()
            .into_iter()
            .map(|c| c.section_path)
            .collect();
        assert_eq!(paths, vec!["overview", "mechanics", "risks"]);
    }

    #[test]
    fn test_duplicate_tier_labels_keep_first() {
        let sections: Value = serde_json::from_str(
            r#"{"overview": {"novice": "First.", "beginner": "Second.", "advanced": "Deep."}}"#,
        )
        .unwrap();

        let copy = protocol_with_sections(sections).section_copy();
        assert_eq!(
            copy,
            vec![
                SectionCopy {
                    section_path: "overview".to_string(),
                    reading_level: Some(ReadingLevel::Novice),
                    content: "First.".to_string(),
                },
                SectionCopy {
                    section_path: "overview".to_string(),
                    reading_level: Some(ReadingLevel::Analyst),
                    content: "Deep.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_or_scalar_sections() {
        let mut protocol = protocol_with_sections(json!(42));
        assert!(protocol.section_copy().is_empty());
        protocol.sections = None;
        assert!(protocol.section_copy().is_empty());
    }
}
