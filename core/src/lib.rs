//! Core data model for the argot command-line token parser.
//!
//! This crate defines the declaration and result types shared by the
//! parsing engine:
//!
//! - [`ArgumentSpec`] — one declared argument (identity, arity, value
//!   type, choices, default, help text).
//! - [`Arity`] and [`ValueKind`] — the closed tags for token counts and
//!   value types.
//! - [`TypedValues`] — a kind-tagged homogeneous value sequence used for
//!   choices, defaults, and accumulated results.
//! - [`Registry`] — the declaration-ordered spec collection with stable
//!   slot indices and name uniqueness enforcement.
//! - [`ParsedValue`] / [`ParseResult`] — the per-slot and overall parse
//!   outcome.
//!
//! Validation ([`validate_spec`], and [`Registry::declare`]) catches
//! structural mistakes such as mixed positional/named identity,
//! duplicate names, and illegal positional arities before any parsing
//! happens.
//!
//! # Example
//!
//! ```
//! use argot_core::{ArgumentSpec, Arity, Registry, TypedValues, ValueKind};
//!
//! let mut registry = Registry::new();
//! registry.declare(
//!     ArgumentSpec::named(Some("o"), Some("output"), ValueKind::String)
//!         .with_choices(TypedValues::String(vec!["json".into(), "text".into()]))
//!         .with_help("Output format."),
//! ).unwrap();
//! registry.declare(
//!     ArgumentSpec::positional("inputs", ValueKind::String)
//!         .with_arity(Arity::AtLeastOne)
//!         .with_help("Files to process."),
//! ).unwrap();
//!
//! assert_eq!(registry.len(), 2);
//! assert_eq!(registry.positional_slots(), &[1]);
//! assert!(registry.has_long("output"));
//! ```

mod registry;
mod result;
mod types;
mod validate;

pub use registry::Registry;
pub use result::{ParseResult, ParsedValue};
pub use types::{ArgumentSpec, Arity, TypedValues, ValueKind};
pub use validate::{ConfigurationError, validate_spec};
