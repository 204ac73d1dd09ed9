// crates/tessera-core/src/config/tests/mod.rs
#![cfg(test)]

use std::path::Path;
use tempfile::tempdir;

use crate::config::{ConfigError, ConfigFormat, LoaderConfig};
use crate::environment::EnvType;

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("loader.json")), Some(ConfigFormat::Json));
    #[cfg(feature = "yaml-config")]
    assert_eq!(ConfigFormat::from_path(Path::new("loader.YML")), Some(ConfigFormat::Yaml));
    #[cfg(feature = "toml-config")]
    assert_eq!(ConfigFormat::from_path(Path::new("loader.toml")), Some(ConfigFormat::Toml));
    assert_eq!(ConfigFormat::from_path(Path::new("loader.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("loader")), None);
}

#[test]
fn test_defaults_applied() {
    let config = LoaderConfig::from_str(r#"{ "environment": "server" }"#, ConfigFormat::Json).unwrap();
    assert_eq!(config, LoaderConfig::new(EnvType::Server));
    assert!(config.strip);
    assert_eq!(config.level_filter(), log::LevelFilter::Info);
}

#[test]
fn test_level_filter_parsing() {
    let mut config = LoaderConfig::new(EnvType::Client);
    config.log_level = "debug".to_string();
    assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    config.log_level = "chatty".to_string();
    assert_eq!(config.level_filter(), log::LevelFilter::Info);
}

#[test]
fn test_environment_is_case_insensitive() {
    let config = LoaderConfig::from_str(r#"{ "environment": "Server" }"#, ConfigFormat::Json).unwrap();
    assert_eq!(config.environment, EnvType::Server);
}

#[test]
fn test_missing_environment_is_rejected() {
    let err = LoaderConfig::from_str(r#"{ "strip": false }"#, ConfigFormat::Json).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialization { ref format, .. } if format == "json"));
}

#[cfg(feature = "toml-config")]
#[test]
fn test_load_toml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loader.toml");
    std::fs::write(&path, "environment = \"CLIENT\"\nstrip = false\nlog_level = \"warn\"\n").unwrap();

    let config = LoaderConfig::load(&path).unwrap();
    assert_eq!(config.environment, EnvType::Client);
    assert!(!config.strip);
    assert_eq!(config.level_filter(), log::LevelFilter::Warn);
}

#[cfg(feature = "yaml-config")]
#[test]
fn test_yaml_serialize_roundtrip() {
    let mut config = LoaderConfig::new(EnvType::Server);
    config.strip = false;
    let text = config.serialize(ConfigFormat::Yaml).unwrap();
    assert_eq!(LoaderConfig::from_str(&text, ConfigFormat::Yaml).unwrap(), config);
}

#[test]
fn test_load_errors() {
    let dir = tempdir().unwrap();

    let unsupported = dir.path().join("loader.ini");
    std::fs::write(&unsupported, "environment=client").unwrap();
    assert!(matches!(LoaderConfig::load(&unsupported), Err(ConfigError::UnsupportedFormat(_))));

    let missing = dir.path().join("absent.json");
    let err = LoaderConfig::load(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("read_config"));
}
