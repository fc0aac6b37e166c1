//! radar-seed - populate the relational store from a document snapshot
//!
//! Resolves configuration, opens (or creates) the SQLite database, clears it
//! and inserts the snapshot. Exits non-zero on any error.

use anyhow::{Context, Result};
use clap::Parser;
use radar_common::config::{CliOverrides, ConfigResolver, SeedConfig};
use radar_common::db::{family_row_counts, init_database};
use radar_common::Snapshot;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "radar-seed", version, about = "Seed the Horizon Radar database from a JSON snapshot")]
struct Cli {
    /// Bootstrap TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Destination SQLite database (created if missing)
    #[arg(long, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Snapshot JSON export
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Insert without clearing first (fails if rows already exist)
    #[arg(long)]
    no_clear: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, env = "RADAR_LOG_LEVEL", value_name = "LEVEL")]
    log_level: Option<String>,
}

impl From<Cli> for CliOverrides {
    fn from(cli: Cli) -> Self {
        CliOverrides {
            config: cli.config,
            database: cli.database,
            snapshot: cli.snapshot,
            log_level: cli.log_level,
            no_clear: cli.no_clear,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is resolved before tracing so the configured level applies
    let config = match ConfigResolver::new(cli.into()).resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("radar-seed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("radar-seed: failed to initialize logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Starting radar-seed v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config.config_file {
        Some(path) => info!("Config file: {}", path.display()),
        None => warn!("No config file found, using environment and compiled defaults"),
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Seed failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &SeedConfig) -> Result<()> {
    info!("Database path: {}", config.database_path.display());
    info!("Snapshot path: {}", config.snapshot_path.display());

    let pool = init_database(&config.database_path)
        .await
        .with_context(|| format!("opening database {}", config.database_path.display()))?;

    let snapshot = Snapshot::load(&config.snapshot_path)
        .with_context(|| format!("loading snapshot {}", config.snapshot_path.display()))?;

    let report = radar_seed::run_seed(&pool, &snapshot, config.clear_before_seed)
        .await
        .context("seeding database")?;

    let stored = family_row_counts(&pool)
        .await
        .context("counting seeded rows")?;
    for (family, rows) in report.family_totals() {
        let in_db = stored.get(&family).copied().unwrap_or(0);
        if in_db == rows {
            info!("{}: {} rows", family.as_str(), rows);
        } else {
            warn!("{}: inserted {} rows but database holds {}", family.as_str(), rows, in_db);
        }
    }
    debug!("Per-table counts: {}", serde_json::to_string(&report)?);

    pool.close().await;
    Ok(())
}

/// Stderr output filtered by RUST_LOG (or the configured level), plus an
/// optional plain-text copy to `logging.file`
fn init_tracing(config: &SeedConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .with_context(|| format!("invalid log level '{}'", config.logging.level))?;

    let file_layer = match &config.logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}
