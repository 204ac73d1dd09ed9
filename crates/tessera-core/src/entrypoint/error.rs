//! # Tessera Core Entrypoint Errors
//!
//! [`EntrypointError`] covers every way an entrypoint handle such as
//! `com.example.Mod::init` can fail to resolve against an
//! [`EntrypointTable`](super::EntrypointTable), plus duplicate registrations.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntrypointError {
    #[error("Invalid handle format: {0}")]
    InvalidHandle(String),

    #[error("Type '{0}' is not registered")]
    TypeNotFound(String),

    #[error("Type '{0}' has no constructor registered")]
    NotConstructible(String),

    #[error("Ambiguous {0} - refers to both field and method!")]
    Ambiguous(String),

    #[error("Could not find {0}!")]
    MemberNotFound(String),

    #[error("Found multiple method entries of name {0}!")]
    MultipleMethods(String),

    #[error("'{0}' is already registered")]
    DuplicateRegistration(String),
}
