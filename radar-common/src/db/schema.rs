//! Table Schema Definitions
//!
//! Single source of truth for the destination schema. [`TABLES`] lists every
//! seeded table in dependency order (parents before children); creation
//! walks it forwards and clearing walks it backwards.
//!
//! Nested source collections become child tables with an explicit
//! `order_index` (1-based) preserving source order.

/// Group of tables reported together in seed summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableFamily {
    Users,
    Tags,
    Articles,
    Comments,
    Research,
    Protocols,
    Intake,
    System,
}

impl TableFamily {
    pub const ALL: [TableFamily; 8] = [
        TableFamily::Users,
        TableFamily::Tags,
        TableFamily::Articles,
        TableFamily::Comments,
        TableFamily::Research,
        TableFamily::Protocols,
        TableFamily::Intake,
        TableFamily::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableFamily::Users => "users",
            TableFamily::Tags => "tags",
            TableFamily::Articles => "articles",
            TableFamily::Comments => "comments",
            TableFamily::Research => "research",
            TableFamily::Protocols => "protocols",
            TableFamily::Intake => "intake",
            TableFamily::System => "system",
        }
    }
}

/// One destination table
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub family: TableFamily,
    pub ddl: &'static str,
}

const fn table(name: &'static str, family: TableFamily, ddl: &'static str) -> TableSpec {
    TableSpec { name, family, ddl }
}

/// All seeded tables, parents first
pub const TABLES: &[TableSpec] = &[
    table(
        "users",
        TableFamily::Users,
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            source_id TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL,
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            avatar TEXT,
            bio TEXT,
            created_at TEXT
        )
        "#,
    ),
    table(
        "tags",
        TableFamily::Tags,
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    ),
    table(
        "articles",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id TEXT PRIMARY KEY,
            source_id TEXT NOT NULL UNIQUE,
            slug TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            subtitle TEXT,
            category TEXT,
            author_id TEXT REFERENCES users(id),
            status TEXT NOT NULL,
            featured INTEGER NOT NULL DEFAULT 0,
            read_time TEXT,
            cover_image TEXT,
            published_at TEXT,
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    ),
    table(
        "article_tags",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_tags (
            article_id TEXT NOT NULL REFERENCES articles(id),
            tag_id TEXT NOT NULL REFERENCES tags(id),
            order_index INTEGER NOT NULL,
            PRIMARY KEY (article_id, tag_id)
        )
        "#,
    ),
    table(
        "article_abstracts",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_abstracts (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            paragraph TEXT NOT NULL
        )
        "#,
    ),
    table(
        "article_architecture_sections",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_architecture_sections (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL
        )
        "#,
    ),
    table(
        "article_mechanics",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_mechanics (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL
        )
        "#,
    ),
    table(
        "article_team_members",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_team_members (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            name TEXT NOT NULL,
            role TEXT,
            bio TEXT,
            avatar TEXT,
            twitter TEXT
        )
        "#,
    ),
    table(
        "article_events",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_events (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            event_type TEXT NOT NULL,
            title TEXT NOT NULL,
            event_date TEXT
        )
        "#,
    ),
    table(
        "article_links",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_links (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            link_group TEXT NOT NULL,
            kind TEXT NOT NULL,
            url TEXT NOT NULL,
            label TEXT
        )
        "#,
    ),
    table(
        "article_ecosystem_tags",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_ecosystem_tags (
            article_id TEXT NOT NULL REFERENCES articles(id),
            tag_id TEXT NOT NULL REFERENCES tags(id),
            order_index INTEGER NOT NULL,
            PRIMARY KEY (article_id, tag_id)
        )
        "#,
    ),
    table(
        "article_credentials",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_credentials (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            label TEXT NOT NULL,
            value TEXT NOT NULL
        )
        "#,
    ),
    table(
        "article_tokenomics",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_tokenomics (
            article_id TEXT PRIMARY KEY REFERENCES articles(id),
            total_supply TEXT
        )
        "#,
    ),
    table(
        "article_tokenomics_allocations",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_tokenomics_allocations (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            label TEXT NOT NULL,
            percentage REAL NOT NULL,
            color TEXT
        )
        "#,
    ),
    table(
        "article_content_sections",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_content_sections (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            reading_level TEXT NOT NULL,
            order_index INTEGER NOT NULL,
            heading TEXT NOT NULL,
            body TEXT NOT NULL
        )
        "#,
    ),
    table(
        "article_images",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_images (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            url TEXT NOT NULL,
            caption TEXT,
            after_section TEXT
        )
        "#,
    ),
    table(
        "article_toc_entries",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_toc_entries (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            anchor TEXT NOT NULL,
            title TEXT NOT NULL,
            level INTEGER NOT NULL
        )
        "#,
    ),
    table(
        "article_radar_ratings",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_radar_ratings (
            article_id TEXT PRIMARY KEY REFERENCES articles(id),
            overall REAL NOT NULL,
            technology REAL,
            team REAL,
            tokenomics REAL,
            adoption REAL,
            risk REAL
        )
        "#,
    ),
    table(
        "article_stats",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_stats (
            article_id TEXT PRIMARY KEY REFERENCES articles(id),
            tvl_usd REAL NOT NULL,
            tvl_text TEXT NOT NULL,
            users_count INTEGER NOT NULL,
            users_text TEXT NOT NULL,
            transactions_count INTEGER NOT NULL,
            transactions_text TEXT NOT NULL,
            market_cap_usd REAL NOT NULL,
            market_cap_text TEXT NOT NULL
        )
        "#,
    ),
    table(
        "article_problem_users_value",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_problem_users_value (
            article_id TEXT PRIMARY KEY REFERENCES articles(id),
            problem TEXT,
            users TEXT,
            value TEXT
        )
        "#,
    ),
    table(
        "article_problems",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_problems (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            text TEXT NOT NULL
        )
        "#,
    ),
    table(
        "article_user_segments",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_user_segments (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            text TEXT NOT NULL
        )
        "#,
    ),
    table(
        "article_value_props",
        TableFamily::Articles,
        r#"
        CREATE TABLE IF NOT EXISTS article_value_props (
            id TEXT PRIMARY KEY,
            article_id TEXT NOT NULL REFERENCES articles(id),
            order_index INTEGER NOT NULL,
            text TEXT NOT NULL
        )
        "#,
    ),
    table(
        "comments",
        TableFamily::Comments,
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id TEXT PRIMARY KEY,
            source_id TEXT NOT NULL UNIQUE,
            article_id TEXT NOT NULL REFERENCES articles(id),
            parent_id TEXT REFERENCES comments(id),
            user_id TEXT REFERENCES users(id),
            author_name TEXT,
            content TEXT NOT NULL,
            likes INTEGER NOT NULL DEFAULT 0,
            depth INTEGER NOT NULL,
            created_at TEXT
        )
        "#,
    ),
    table(
        "research_cards",
        TableFamily::Research,
        r#"
        CREATE TABLE IF NOT EXISTS research_cards (
            id TEXT PRIMARY KEY,
            source_id TEXT NOT NULL UNIQUE,
            article_id TEXT REFERENCES articles(id),
            title TEXT NOT NULL,
            summary TEXT,
            category TEXT,
            image_url TEXT,
            opinion_count INTEGER NOT NULL,
            opinion_text TEXT,
            created_at TEXT
        )
        "#,
    ),
    table(
        "research_card_tags",
        TableFamily::Research,
        r#"
        CREATE TABLE IF NOT EXISTS research_card_tags (
            research_card_id TEXT NOT NULL REFERENCES research_cards(id),
            tag_id TEXT NOT NULL REFERENCES tags(id),
            order_index INTEGER NOT NULL,
            PRIMARY KEY (research_card_id, tag_id)
        )
        "#,
    ),
    table(
        "protocols",
        TableFamily::Protocols,
        r#"
        CREATE TABLE IF NOT EXISTS protocols (
            id TEXT PRIMARY KEY,
            slug TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            description TEXT,
            logo TEXT,
            website TEXT,
            tvl_usd REAL NOT NULL,
            tvl_text TEXT NOT NULL,
            users_count INTEGER NOT NULL,
            users_text TEXT NOT NULL,
            risk_level TEXT
        )
        "#,
    ),
    table(
        "chains",
        TableFamily::Protocols,
        r#"
        CREATE TABLE IF NOT EXISTS chains (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    ),
    table(
        "protocol_chain_map",
        TableFamily::Protocols,
        r#"
        CREATE TABLE IF NOT EXISTS protocol_chain_map (
            protocol_id TEXT NOT NULL REFERENCES protocols(id),
            chain_id TEXT NOT NULL REFERENCES chains(id),
            order_index INTEGER NOT NULL,
            PRIMARY KEY (protocol_id, chain_id)
        )
        "#,
    ),
    table(
        "protocol_categories",
        TableFamily::Protocols,
        r#"
        CREATE TABLE IF NOT EXISTS protocol_categories (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            tag_id TEXT NOT NULL REFERENCES tags(id)
        )
        "#,
    ),
    table(
        "protocol_category_map",
        TableFamily::Protocols,
        r#"
        CREATE TABLE IF NOT EXISTS protocol_category_map (
            protocol_id TEXT NOT NULL REFERENCES protocols(id),
            category_id TEXT NOT NULL REFERENCES protocol_categories(id),
            order_index INTEGER NOT NULL,
            PRIMARY KEY (protocol_id, category_id)
        )
        "#,
    ),
    table(
        "protocol_section_copy",
        TableFamily::Protocols,
        r#"
        CREATE TABLE IF NOT EXISTS protocol_section_copy (
            id TEXT PRIMARY KEY,
            protocol_id TEXT NOT NULL REFERENCES protocols(id),
            order_index INTEGER NOT NULL,
            section_path TEXT NOT NULL,
            reading_level TEXT,
            content TEXT NOT NULL
        )
        "#,
    ),
    table(
        "newsletter_subscriptions",
        TableFamily::Intake,
        r#"
        CREATE TABLE IF NOT EXISTS newsletter_subscriptions (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            source TEXT,
            subscribed_at TEXT
        )
        "#,
    ),
    table(
        "research_requests",
        TableFamily::Intake,
        r#"
        CREATE TABLE IF NOT EXISTS research_requests (
            id TEXT PRIMARY KEY,
            source_id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            protocol_name TEXT NOT NULL,
            website TEXT,
            message TEXT,
            status TEXT NOT NULL,
            created_at TEXT
        )
        "#,
    ),
    table(
        "system_metadata",
        TableFamily::System,
        r#"
        CREATE TABLE IF NOT EXISTS system_metadata (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
];

/// Secondary indexes for the owner foreign keys
pub const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_articles_author ON articles(author_id)",
    "CREATE INDEX IF NOT EXISTS idx_article_abstracts_article ON article_abstracts(article_id, order_index)",
    "CREATE INDEX IF NOT EXISTS idx_article_content_article ON article_content_sections(article_id, reading_level, order_index)",
    "CREATE INDEX IF NOT EXISTS idx_article_toc_article ON article_toc_entries(article_id, order_index)",
    "CREATE INDEX IF NOT EXISTS idx_comments_article ON comments(article_id)",
    "CREATE INDEX IF NOT EXISTS idx_comments_parent ON comments(parent_id)",
    "CREATE INDEX IF NOT EXISTS idx_research_cards_article ON research_cards(article_id)",
    "CREATE INDEX IF NOT EXISTS idx_section_copy_protocol ON protocol_section_copy(protocol_id, section_path)",
];

/// Look up a table by name
pub fn table_spec(name: &str) -> Option<&'static TableSpec> {
    TABLES.iter().find(|t| t.name == name)
}

/// Names of the tables in one family, in dependency order
pub fn family_tables(family: TableFamily) -> impl Iterator<Item = &'static str> {
    TABLES
        .iter()
        .filter(move |t| t.family == family)
        .map(|t| t.name)
}
