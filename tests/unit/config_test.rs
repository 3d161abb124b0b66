//! Tests for configuration loading

use std::fs;

use policyhub::config::{Config, DEFAULT_ADDR};
use policyhub::paths;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.server.addr, DEFAULT_ADDR);
}

#[test]
fn test_relative_paths_resolve_against_config_dir() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[store]
path = "data/policies.toml"

[contracts]
path = "/srv/contracts.json"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.store.path, temp.path().join("data/policies.toml"));
    assert_eq!(config.contracts.path, std::path::PathBuf::from("/srv/contracts.json"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server\naddr = 1").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("invalid config"));
}

#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");
    let mut config = Config::default();
    config.server.addr = "0.0.0.0:9999".to_string();
    config.store.path = temp.path().join("policies.toml");
    config.contracts.path = temp.path().join("contracts.json");

    config.save(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
#[serial]
fn test_config_env_overrides_location() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");

    // SAFETY: serialized with other env-touching tests
    unsafe { std::env::set_var(paths::CONFIG_ENV, &path) };
    assert_eq!(paths::config_file(), path);
    unsafe { std::env::remove_var(paths::CONFIG_ENV) };

    assert!(paths::config_file().ends_with("policyhub/config.toml"));
}
