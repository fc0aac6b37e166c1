//! Label classifiers
//!
//! Map free-text labels from the document store onto the closed enumerations
//! stored in the relational schema. Unrecognized input lands in a default
//! bucket and never fails.

use serde::{Deserialize, Serialize};

/// Timeline event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Testnet,
    Mainnet,
    Raise,
    Launch,
    Chain,
    Audit,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Testnet => "testnet",
            EventType::Mainnet => "mainnet",
            EventType::Raise => "raise",
            EventType::Launch => "launch",
            EventType::Chain => "chain",
            EventType::Audit => "audit",
            EventType::Other => "other",
        }
    }
}

/// Keyword groups in match priority order
const EVENT_KEYWORDS: &[(&[&str], EventType)] = &[
    (&["testnet"], EventType::Testnet),
    (&["mainnet"], EventType::Mainnet),
    (&["raise", "funding"], EventType::Raise),
    (&["launch", "release"], EventType::Launch),
    (&["chain"], EventType::Chain),
    (&["audit"], EventType::Audit),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEvent {
    pub kind: EventType,
    /// Untouched source text
    pub title: String,
}

/// Classify an event description by keyword; first match wins
pub fn normalize_event_type(text: &str) -> NormalizedEvent {
    let lowered = text.to_lowercase();
    let kind = EVENT_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, kind)| *kind)
        .unwrap_or(EventType::Other);

    NormalizedEvent {
        kind,
        title: text.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkGroup {
    Social,
    Technical,
}

impl LinkGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkGroup::Social => "social",
            LinkGroup::Technical => "technical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkClass {
    pub group: LinkGroup,
    pub kind: String,
}

const SOCIAL_PLATFORMS: &[&str] = &[
    "twitter", "x", "discord", "telegram", "medium", "reddit", "youtube", "linkedin", "github",
    "farcaster", "mirror",
];

const TECHNICAL_TYPES: &[&str] = &[
    "whitepaper",
    "docs",
    "documentation",
    "audit",
    "github",
    "litepaper",
    "explorer",
    "api",
    "website",
];

fn in_set(set: &[&str], value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    !lowered.is_empty() && set.contains(&lowered.as_str())
}

/// Classify a link by its (platform, type) pair
///
/// Anything unrecognized is filed as social, keyed by whichever label is
/// present.
pub fn classify_link(platform: &str, link_type: &str) -> LinkClass {
    if in_set(SOCIAL_PLATFORMS, platform) {
        return LinkClass {
            group: LinkGroup::Social,
            kind: platform.to_string(),
        };
    }

    if in_set(TECHNICAL_TYPES, link_type) {
        return LinkClass {
            group: LinkGroup::Technical,
            kind: link_type.to_string(),
        };
    }

    let kind = [platform, link_type]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or("other")
        .to_string();

    LinkClass {
        group: LinkGroup::Social,
        kind,
    }
}
