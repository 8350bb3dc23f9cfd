use std::fs;
use std::path::PathBuf;

use streamscout::config::Config;
use streamscout::error::{ConfigError, Error};
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("streamscout.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_full_file() {
    let toml = r#"
[logging]
level = "debug"
format = "json"

[ranking]
max_combination_size = 2
min_coverage = 75
tie_band = 3

[recommend]
near_complete = 85

[catalog]
path = "data/catalog.json"
"#;

    let dir = TempDir::new().unwrap();
    let config = Config::load(write_temp_config(&dir, toml)).expect("config should load");

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.ranking.max_combination_size, 2);
    assert_eq!(config.ranking.min_coverage, 75);
    assert_eq!(config.recommend.near_complete, 85);
    assert_eq!(config.catalog.path, PathBuf::from("data/catalog.json"));

    let options = config.ranking.options().unwrap();
    assert_eq!(options.tie_band(), 3);
    assert_eq!(config.recommend.options().unwrap().near_complete(), 85);
}

#[test]
fn config_rejects_coverage_above_hundred() {
    let toml = r#"
[ranking]
min_coverage = 120
"#;

    let dir = TempDir::new().unwrap();
    let result = Config::load(write_temp_config(&dir, toml));

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "min_coverage",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid min_coverage error, got {err}"),
        Ok(config) => panic!(
            "Expected min_coverage to be rejected, got {}",
            config.ranking.min_coverage
        ),
    }
}

#[test]
fn config_rejects_invalid_near_complete() {
    let toml = r#"
[recommend]
near_complete = 101
"#;

    let dir = TempDir::new().unwrap();
    let result = Config::load(write_temp_config(&dir, toml));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "near_complete",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_combination_size() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(write_temp_config(
        &dir,
        "[ranking]\nmax_combination_size = 0\n",
    ));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "max_combination_size",
            ..
        }))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}
