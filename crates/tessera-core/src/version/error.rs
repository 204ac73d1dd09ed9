//! # Tessera Core Version Errors
//!
//! Defines [`VersionError`], the "version parsing" failure category. The
//! comparator itself never fails; every variant here is raised while turning
//! text into a [`SemanticVersion`](super::SemanticVersion) or a
//! [`VersionPredicate`](super::VersionPredicate).
use thiserror::Error;

/// Error type for version and predicate parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Version string is empty")]
    Empty,

    #[error("Version '{version}' starts or ends with a dot")]
    StrayDot { version: String },

    #[error("Version '{version}' has an empty component at position {position}")]
    EmptyComponent { version: String, position: usize },

    #[error("Could not parse component '{component}' of version '{version}'")]
    InvalidComponent { version: String, component: String },

    #[error("Version '{0}' has a number after a wildcard component")]
    InterjacentWildcard(String),

    #[error("Version '{0}' consists of a single wildcard")]
    LoneWildcard(String),

    #[error("Pre-release version '{0}' may not use wildcard components")]
    WildcardWithPrerelease(String),

    #[error("Invalid pre-release key '{prerelease}' in version '{version}'")]
    InvalidPrerelease { version: String, prerelease: String },

    #[error("Invalid version predicate '{predicate}': {message}")]
    InvalidPredicate { predicate: String, message: String },
}
