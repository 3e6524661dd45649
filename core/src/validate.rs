//! Declaration-time validation of argument specifications.
//!
//! Structural rules are enforced when a spec is registered, before any
//! parsing happens: identity rules (positional versus named), positional
//! arity constraints, and kind agreement between the declared value type
//! and any choice or default payload.
//!
//! # Examples
//!
//! ```
//! use argot_core::{ArgumentSpec, ConfigurationError, ValueKind, validate_spec};
//!
//! let ok = ArgumentSpec::named(Some("c"), Some("count"), ValueKind::Int32);
//! assert!(validate_spec(&ok).is_ok());
//!
//! // Invalid: positional identity mixed with a named identity
//! let mut bad = ArgumentSpec::positional("input", ValueKind::String);
//! bad.long = Some("input".into());
//! assert_eq!(
//!     validate_spec(&bad),
//!     Err(ConfigurationError::MixedIdentity("input".into())),
//! );
//! ```

use thiserror::Error;

use crate::{ArgumentSpec, Arity, ValueKind};

/// Errors raised while declaring an argument specification.
///
/// These are unrecoverable configuration mistakes, reported at the point
/// of declaration and never carried inside a parse result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Spec declares neither a positional, short, nor long name.
    #[error("argument must declare a positional, short, or long name")]
    MissingName,
    /// Positional name combined with a short or long name.
    #[error("positional argument '{0}' cannot also carry a short or long name")]
    MixedIdentity(String),
    /// Short name already registered by an earlier spec.
    #[error("short name '{0}' already exists")]
    DuplicateShortName(String),
    /// Long name already registered by an earlier spec.
    #[error("long name '{0}' already exists")]
    DuplicateLongName(String),
    /// Positional name already registered by an earlier spec.
    #[error("positional name '{0}' already exists")]
    DuplicatePositionalName(String),
    /// Required positional declared with zero or unbounded arity.
    #[error("required positional argument '{0}' cannot have a zero or unbounded count")]
    InvalidRequiredPositionalArity(String),
    /// Optional positional declared with an arity other than exactly one.
    #[error("optional positional argument '{0}' must consume exactly one token")]
    InvalidOptionalPositionalArity(String),
    /// A second required one-or-more positional; distribution supports one.
    #[error("a required variadic positional already exists, '{0}' would be the second")]
    SecondVariadicPositional(String),
    /// Choice set declared for a bool argument.
    #[error("bool argument '{0}' takes no choice set")]
    BoolChoices(String),
    /// Choice payload kind disagrees with the declared value type.
    #[error("choices for '{0}' do not match the declared {1} type")]
    ChoicesTypeMismatch(String, &'static str),
    /// Default payload kind disagrees with the declared value type.
    #[error("default for '{0}' does not match the declared {1} type")]
    DefaultTypeMismatch(String, &'static str),
}

/// Validates the structural rules of a single spec.
///
/// Uniqueness against previously declared specs is checked separately by
/// the registry; this function covers everything knowable from the spec
/// alone.
///
/// # Examples
///
/// ```
/// use argot_core::{ArgumentSpec, Arity, ConfigurationError, ValueKind, validate_spec};
///
/// // Required positionals cannot have unbounded arity
/// let bad = ArgumentSpec::positional("files", ValueKind::String)
///     .with_arity(Arity::AnyCount);
/// assert_eq!(
///     validate_spec(&bad),
///     Err(ConfigurationError::InvalidRequiredPositionalArity("files".into())),
/// );
/// ```
pub fn validate_spec(spec: &ArgumentSpec) -> Result<(), ConfigurationError> {
    if spec.positional.is_none() && spec.short.is_none() && spec.long.is_none() {
        return Err(ConfigurationError::MissingName);
    }

    if let Some(name) = &spec.positional {
        if spec.short.is_some() || spec.long.is_some() {
            return Err(ConfigurationError::MixedIdentity(name.clone()));
        }
        if spec.required && matches!(spec.arity, Arity::Exact(0) | Arity::AnyCount) {
            return Err(ConfigurationError::InvalidRequiredPositionalArity(
                name.clone(),
            ));
        }
        if !spec.required && spec.arity != Arity::Exact(1) {
            return Err(ConfigurationError::InvalidOptionalPositionalArity(
                name.clone(),
            ));
        }
    }

    if let Some(choices) = &spec.choices {
        if spec.kind == ValueKind::Bool {
            return Err(ConfigurationError::BoolChoices(
                spec.display_name().to_string(),
            ));
        }
        if choices.kind() != spec.kind {
            return Err(ConfigurationError::ChoicesTypeMismatch(
                spec.display_name().to_string(),
                spec.kind.label(),
            ));
        }
    }

    if let Some(default) = &spec.default {
        if default.kind() != spec.kind {
            return Err(ConfigurationError::DefaultTypeMismatch(
                spec.display_name().to_string(),
                spec.kind.label(),
            ));
        }
    }

    Ok(())
}
