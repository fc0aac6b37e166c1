//! Bootstrap configuration loading and path resolution
//!
//! Each setting is resolved with the following priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing default config file is not an error: resolution continues on
//! compiled defaults and [`SeedConfig::config_file`] is left empty so the
//! caller can warn once logging is up. An explicitly named config file that
//! does not exist is an error.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "RADAR_CONFIG";
/// Environment variable naming the destination database file
pub const DATABASE_ENV_VAR: &str = "RADAR_DATABASE";
/// Environment variable naming the snapshot export file
pub const SNAPSHOT_ENV_VAR: &str = "RADAR_SNAPSHOT";

/// Bootstrap configuration loaded from TOML file
///
/// Every field is optional; absent fields fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Path to the JSON export of the document store
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,

    /// Clear all destination tables before seeding
    #[serde(default)]
    pub clear_before_seed: Option<bool>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// OS-dependent fallback values
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub database_path: PathBuf,
    pub snapshot_path: PathBuf,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            database_path: default_data_folder().join("radar.db"),
            snapshot_path: PathBuf::from("./data/export.json"),
            log_level: default_log_level(),
        }
    }
}

/// Get OS-dependent default data folder path
fn default_data_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/horizon-radar
        dirs::data_local_dir()
            .map(|d| d.join("horizon-radar"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/horizon-radar"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("horizon-radar"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/horizon-radar"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("horizon-radar"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\horizon-radar"))
    } else {
        PathBuf::from("./radar_data")
    }
}

/// Default config file location (`<config_dir>/horizon-radar/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("horizon-radar").join("config.toml"))
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_clear: bool,
}

/// Fully resolved seed configuration
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database_path: PathBuf,
    pub snapshot_path: PathBuf,
    pub clear_before_seed: bool,
    pub logging: LoggingConfig,
    /// TOML file the values were read from, if any
    pub config_file: Option<PathBuf>,
}

/// Resolves [`SeedConfig`] from CLI, environment, TOML and defaults
pub struct ConfigResolver {
    overrides: CliOverrides,
    defaults: CompiledDefaults,
}

impl ConfigResolver {
    pub fn new(overrides: CliOverrides) -> Self {
        Self {
            overrides,
            defaults: CompiledDefaults::for_current_platform(),
        }
    }

    /// Replace compiled defaults (used by tests to avoid touching real folders)
    pub fn with_defaults(mut self, defaults: CompiledDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn resolve(&self) -> Result<SeedConfig> {
        let (toml_config, config_file) = self.load_toml()?;

        let database_path = self
            .overrides
            .database
            .clone()
            .or_else(|| env_path(DATABASE_ENV_VAR))
            .or_else(|| toml_config.database_path.clone())
            .unwrap_or_else(|| self.defaults.database_path.clone());

        let snapshot_path = self
            .overrides
            .snapshot
            .clone()
            .or_else(|| env_path(SNAPSHOT_ENV_VAR))
            .or_else(|| toml_config.snapshot_path.clone())
            .unwrap_or_else(|| self.defaults.snapshot_path.clone());

        let clear_before_seed = if self.overrides.no_clear {
            false
        } else {
            toml_config.clear_before_seed.unwrap_or(true)
        };

        let mut logging = toml_config.logging.clone();
        if config_file.is_none() {
            logging.level = self.defaults.log_level.clone();
        }
        if let Some(level) = &self.overrides.log_level {
            logging.level = level.clone();
        }

        Ok(SeedConfig {
            database_path,
            snapshot_path,
            clear_before_seed,
            logging,
            config_file,
        })
    }

    fn load_toml(&self) -> Result<(TomlConfig, Option<PathBuf>)> {
        let explicit = self
            .overrides
            .config
            .clone()
            .or_else(|| env_path(CONFIG_ENV_VAR));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            let config = TomlConfig::load(&path)?;
            return Ok((config, Some(path)));
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                let config = TomlConfig::load(&path)?;
                Ok((config, Some(path)))
            }
            _ => Ok((TomlConfig::default(), None)),
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
