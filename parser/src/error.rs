//! Hard input errors.
//!
//! Usage errors abort a parse at the point of occurrence and surface as
//! `Err` values from the parse call; they are never carried inside a
//! [`ParseResult`](argot_core::ParseResult), unlike ordinary first-error
//! parse failures.

use thiserror::Error;

/// Unrecoverable input errors raised during a parse call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A prefixed token matched no declared or derived argument name.
    #[error("unknown input argument: {0}")]
    UnknownArgument(String),
}

/// Convenience alias for results with [`UsageError`].
pub type Result<T> = std::result::Result<T, UsageError>;
