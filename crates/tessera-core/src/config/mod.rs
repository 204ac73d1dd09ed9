//! # Tessera Core Loader Configuration
//!
//! [`LoaderConfig`] carries the settings a loader passes explicitly into the
//! core: the target environment, whether stripping is applied, and the log
//! level. It is read from JSON, YAML (`yaml-config` feature) or TOML
//! (`toml-config` feature), with the format chosen by file extension.
pub mod error;

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
#[cfg(feature = "yaml-config")]
use serde_yaml;
#[cfg(feature = "toml-config")]
use toml;

use crate::environment::EnvType;
pub use error::ConfigError;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

fn default_strip() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings the loader hands to the core explicitly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Runtime side units are admitted into
    pub environment: EnvType,
    /// When false, plans are computed but never applied
    #[serde(default = "default_strip")]
    pub strip: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl LoaderConfig {
    pub fn new(environment: EnvType) -> Self {
        Self {
            environment,
            strip: default_strip(),
            log_level: default_log_level(),
        }
    }

    /// Load a configuration file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            operation: "read_config".to_string(),
            source,
        })?;
        let config = Self::from_str(&content, format)?;
        log::info!("Loaded loader configuration from {} (environment {})", path.display(), config.environment);
        Ok(config)
    }

    /// Deserialize from string based on format
    pub fn from_str(data: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| ConfigError::Deserialization {
                format: "json".to_string(),
                source: Box::new(e),
            }),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| ConfigError::Deserialization {
                format: "yaml".to_string(),
                source: Box::new(e),
            }),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| ConfigError::Deserialization {
                format: "toml".to_string(),
                source: Box::new(e),
            }),
        }
    }

    /// Serialize to string based on format
    pub fn serialize(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
                format: "json".to_string(),
                source: Box::new(e),
            }),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| ConfigError::Serialization {
                format: "yaml".to_string(),
                source: Box::new(e),
            }),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
                format: "toml".to_string(),
                source: Box::new(e),
            }),
        }
    }

    /// Parsed `log_level`, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or_else(|_| {
            log::warn!("Unknown log level '{}', using 'info'", self.log_level);
            log::LevelFilter::Info
        })
    }
}

#[cfg(test)]
mod tests;
