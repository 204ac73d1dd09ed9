//! # Tessera Core
//!
//! The compatibility and conditioning core of the Tessera plugin loader.
//!
//! - [`version`]: semantic versions with wildcards, their comparator, and
//!   dependency predicates.
//! - [`environment`]: the environment stripper, which plans which
//!   declarations of a compiled unit to drop for a target runtime side.
//! - [`entrypoint`]: the lookup table that resolves declared entrypoints.
//! - [`config`]: loader settings passed into the core.
//!
//! Everything in `version` and `environment` is a pure function of its
//! inputs and may run in parallel without coordination.
pub mod config;
pub mod entrypoint;
pub mod environment;
pub mod error;
pub mod version;

pub use config::LoaderConfig;
pub use entrypoint::EntrypointTable;
pub use environment::{AnnotationOccurrence, CompiledUnit, EnvType, EnvironmentStripper, StripPlan};
pub use error::{Error, Result};
pub use version::{compare, SemanticVersion, Version, VersionPredicate};

#[cfg(test)]
mod tests;
