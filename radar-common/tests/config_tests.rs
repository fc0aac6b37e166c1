//! Unit tests for configuration resolution
//!
//! Priority order: CLI → environment → TOML file → compiled defaults.
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate RADAR_* variables are marked with #[serial].

use radar_common::config::{
    CliOverrides, CompiledDefaults, ConfigResolver, CONFIG_ENV_VAR, DATABASE_ENV_VAR,
    SNAPSHOT_ENV_VAR,
};
use radar_common::Error;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var(CONFIG_ENV_VAR);
    env::remove_var(DATABASE_ENV_VAR);
    env::remove_var(SNAPSHOT_ENV_VAR);
}

fn test_defaults() -> CompiledDefaults {
    CompiledDefaults {
        database_path: PathBuf::from("/tmp/radar-default.db"),
        snapshot_path: PathBuf::from("/tmp/radar-default.json"),
        log_level: "info".to_string(),
    }
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_explicit_config_file_values() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        &dir,
        r#"
        database_path = "/srv/radar/radar.db"
        snapshot_path = "/srv/radar/export.json"
        clear_before_seed = false

        [logging]
        level = "debug"
        "#,
    );

    let resolved = ConfigResolver::new(CliOverrides {
        config: Some(config_path),
        ..Default::default()
    })
    .with_defaults(test_defaults())
    .resolve()
    .unwrap();

    assert_eq!(resolved.database_path, PathBuf::from("/srv/radar/radar.db"));
    assert_eq!(resolved.snapshot_path, PathBuf::from("/srv/radar/export.json"));
    assert!(!resolved.clear_before_seed);
    assert_eq!(resolved.logging.level, "debug");
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, r#"database_path = "/srv/radar/radar.db""#);

    env::set_var(CONFIG_ENV_VAR, &config_path);
    env::set_var(DATABASE_ENV_VAR, "/tmp/from-env.db");

    let resolved = ConfigResolver::new(CliOverrides::default())
        .with_defaults(test_defaults())
        .resolve()
        .unwrap();

    assert_eq!(resolved.database_path, PathBuf::from("/tmp/from-env.db"));
    assert_eq!(resolved.snapshot_path, PathBuf::from("/tmp/radar-default.json"));

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var(SNAPSHOT_ENV_VAR, "/tmp/from-env.json");
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "");

    let resolved = ConfigResolver::new(CliOverrides {
        config: Some(config_path),
        snapshot: Some(PathBuf::from("/tmp/from-cli.json")),
        log_level: Some("warn".to_string()),
        no_clear: true,
        ..Default::default()
    })
    .with_defaults(test_defaults())
    .resolve()
    .unwrap();

    assert_eq!(resolved.snapshot_path, PathBuf::from("/tmp/from-cli.json"));
    assert_eq!(resolved.logging.level, "warn");
    assert!(!resolved.clear_before_seed);

    clear_env();
}

#[test]
#[serial]
fn test_clear_defaults_to_true() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "");

    let resolved = ConfigResolver::new(CliOverrides {
        config: Some(config_path),
        ..Default::default()
    })
    .with_defaults(test_defaults())
    .resolve()
    .unwrap();

    assert!(resolved.clear_before_seed);
    assert_eq!(resolved.database_path, PathBuf::from("/tmp/radar-default.db"));
}

#[test]
#[serial]
fn test_missing_explicit_config_is_error() {
    clear_env();

    let result = ConfigResolver::new(CliOverrides {
        config: Some(PathBuf::from("/nonexistent/radar/config.toml")),
        ..Default::default()
    })
    .resolve();

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_empty_env_var_ignored() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "");
    env::set_var(DATABASE_ENV_VAR, "");

    let resolved = ConfigResolver::new(CliOverrides {
        config: Some(config_path),
        ..Default::default()
    })
    .with_defaults(test_defaults())
    .resolve()
    .unwrap();

    assert_eq!(resolved.database_path, PathBuf::from("/tmp/radar-default.db"));

    clear_env();
}

#[test]
#[serial]
fn test_config_file_recorded_from_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "snapshot_path = \"/srv/export.json\"\n");
    env::set_var(CONFIG_ENV_VAR, &config_path);

    let resolved = ConfigResolver::new(CliOverrides::default())
        .with_defaults(test_defaults())
        .resolve()
        .unwrap();
    clear_env();

    assert_eq!(resolved.config_file, Some(config_path));
    assert_eq!(resolved.snapshot_path, PathBuf::from("/srv/export.json"));
    assert_eq!(resolved.database_path, PathBuf::from("/tmp/radar-default.db"));
    assert_eq!(resolved.logging.level, "info");
}
