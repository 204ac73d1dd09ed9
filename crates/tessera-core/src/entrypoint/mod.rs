//! # Tessera Core Entrypoints
//!
//! Maps the entrypoint handles a plugin declares (`Type` or `Type::member`)
//! to registered capabilities through an explicit [`EntrypointTable`],
//! resolved once while a plugin is loaded.
pub mod error;
pub mod table;

pub use error::EntrypointError;
pub use table::{EntrypointTable, Factory};
