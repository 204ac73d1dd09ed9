//! # Tessera Core Errors
//!
//! [`Error`] aggregates the typed errors of each subsystem so callers that
//! drive several of them can propagate with `?`. The comparator and the
//! stripper never fail and contribute no variants.
use thiserror::Error as ThisError;

use crate::config::ConfigError;
use crate::entrypoint::EntrypointError;
use crate::version::VersionError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Version parsing error: {0}")]
    VersionParsing(#[from] VersionError),

    #[error("Entrypoint error: {0}")]
    Entrypoint(#[from] EntrypointError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
