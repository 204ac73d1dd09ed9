//! # Tessera Core Versions
//!
//! Version values and the comparator used for dependency and ordering
//! checks between plugins.
//!
//! - **[`semantic`]**: [`SemanticVersion`] with wildcard components, the
//!   [`compare`] function, and the [`Version`] wrapper that falls back to an
//!   opaque string for non-semantic notations.
//! - **[`predicate`]**: [`VersionPredicate`], the `>=1.2 <2 || 3.x` style
//!   requirements a plugin declares against another plugin's version.
//! - **[`error`]**: [`VersionError`], raised only while parsing.
pub mod error;
pub mod predicate;
pub mod semantic;

pub use error::VersionError;
pub use predicate::{Operator, PredicateTerm, VersionPredicate};
pub use semantic::{compare, Component, SemanticVersion, Version};
