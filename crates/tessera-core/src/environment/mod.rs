//! # Tessera Core Environment Stripping
//!
//! Decides which declarations of a compiled unit must go before the unit is
//! admitted into a given runtime side.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`env_type`]**: [`EnvType`], the target side, and [`ModEnvironment`],
//!   the side a whole plugin declares.
//! - **[`annotation`]**: [`AnnotationOccurrence`], the closed set of
//!   environment annotations a reader can report.
//! - **[`unit`]**: the declaration stream ([`DeclarationEvent`]) and the
//!   [`CompiledUnit`] structural model that produces it and applies plans.
//! - **[`stripper`]**: [`EnvironmentStripper`], a pure fold over the stream.
//! - **[`plan`]**: [`StripPlan`], the result handed to the rewriter.
//!
//! Nothing here reads global state: the target environment is always an
//! explicit argument.
pub mod annotation;
pub mod env_type;
pub mod plan;
pub mod stripper;
pub mod unit;

pub use annotation::AnnotationOccurrence;
pub use env_type::{EnvType, ModEnvironment};
pub use plan::StripPlan;
pub use stripper::EnvironmentStripper;
pub use unit::{CompiledUnit, Declaration, DeclarationEvent, MemberDecl, MemberId};
