//! Database initialization
//!
//! Opens (or creates) the destination SQLite file and creates every table in
//! [`TABLES`](super::schema::TABLES) if missing. Safe to call repeatedly.

use super::schema::{INDEXES, TABLES};
use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Current schema version
///
/// **IMPORTANT:** Increment this when the table definitions change
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Open the destination database and ensure the schema exists
///
/// The pool holds a single connection: the seed pipeline is strictly
/// sequential and assumes it is the sole writer.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Pragmas are set on the connect options so a recycled connection keeps them
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create all tables and indexes (idempotent)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_schema_version_table(pool).await?;

    for spec in TABLES {
        sqlx::query(spec.ddl).execute(pool).await?;
        debug!("Ensured table {}", spec.name);
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    record_schema_version(pool).await?;

    info!("Schema ready ({} tables, v{})", TABLES.len(), CURRENT_SCHEMA_VERSION);
    Ok(())
}

async fn create_schema_version_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Get current schema version from database (0 if never recorded)
pub async fn get_schema_version(pool: &SqlitePool) -> Result<i32> {
    let version: Option<i32> = sqlx::query_scalar(
        "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1"
    )
    .fetch_optional(pool)
    .await?;

    Ok(version.unwrap_or(0))
}

async fn record_schema_version(pool: &SqlitePool) -> Result<()> {
    let current = get_schema_version(pool).await?;

    if current > CURRENT_SCHEMA_VERSION {
        warn!(
            "Database schema version ({}) is newer than code version ({})",
            current, CURRENT_SCHEMA_VERSION
        );
        return Ok(());
    }

    if current < CURRENT_SCHEMA_VERSION {
        sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
            .bind(CURRENT_SCHEMA_VERSION)
            .execute(pool)
            .await?;
    }

    Ok(())
}
