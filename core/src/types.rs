//! Declaration model for command-line argument specifications.
//!
//! This module defines the types used to declare what a command line is
//! expected to look like. The types are designed for serialization with
//! [`serde`] so that full specifications can round-trip through JSON.

use serde::{Deserialize, Serialize};

/// Value type tag for a declared argument.
///
/// Every argument decodes its value tokens into exactly one of these
/// types. The tag also selects which homogeneous sequence a
/// [`TypedValues`] carries.
///
/// # Examples
///
/// ```
/// use argot_core::ValueKind;
///
/// let kind = ValueKind::default();
/// assert_eq!(kind, ValueKind::String);
/// assert_eq!(ValueKind::Int32.label(), "INT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueKind {
    /// Raw string value (the default).
    #[default]
    String,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean literal, `true` or `false`.
    Bool,
}

impl ValueKind {
    /// Display label used by the help renderer.
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::String => "STRING",
            ValueKind::Int32 => "INT",
            ValueKind::Int64 => "LONG_LONG",
            ValueKind::Float64 => "DOUBLE",
            ValueKind::Bool => "BOOL",
        }
    }
}

/// Declared count of value tokens an argument consumes.
///
/// `Exact(0)` denotes a flag: a presence marker that carries no value
/// tokens at all.
///
/// # Examples
///
/// ```
/// use argot_core::Arity;
///
/// assert!(Arity::Exact(0).is_flag());
/// assert!(Arity::Exact(2).accepts_count(2));
/// assert!(!Arity::Exact(2).accepts_count(1));
/// assert!(Arity::AtLeastOne.accepts_count(7));
/// assert!(Arity::AnyCount.accepts_count(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// Exactly `n` value tokens; `Exact(0)` is a flag.
    Exact(usize),
    /// Zero or more value tokens.
    AnyCount,
    /// One or more value tokens.
    AtLeastOne,
}

impl Default for Arity {
    fn default() -> Self {
        Arity::Exact(1)
    }
}

impl Arity {
    /// Whether this arity denotes a flag.
    pub fn is_flag(self) -> bool {
        matches!(self, Arity::Exact(0))
    }

    /// Whether a final accumulated count satisfies this arity.
    ///
    /// A flag's single presence marker accumulates as count 1, so
    /// `Exact(0)` accepts exactly 1.
    pub fn accepts_count(self, count: usize) -> bool {
        match self {
            Arity::Exact(0) => count == 1,
            Arity::Exact(n) => count == n,
            Arity::AnyCount => true,
            Arity::AtLeastOne => count >= 1,
        }
    }
}

/// A homogeneous sequence of decoded values, tagged by [`ValueKind`].
///
/// Used for choice sets, default sequences, and accumulated parse
/// values. Carrying the tag and the sequence together makes it
/// impossible to read a value with the wrong type accessor.
///
/// # Examples
///
/// ```
/// use argot_core::{TypedValues, ValueKind};
///
/// let values = TypedValues::Int32(vec![1, 2, 3]);
/// assert_eq!(values.kind(), ValueKind::Int32);
/// assert_eq!(values.len(), 3);
///
/// let empty = TypedValues::empty(ValueKind::Bool);
/// assert!(empty.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedValues {
    /// String values.
    String(Vec<String>),
    /// 32-bit integer values.
    Int32(Vec<i32>),
    /// 64-bit integer values.
    Int64(Vec<i64>),
    /// 64-bit float values.
    Float64(Vec<f64>),
    /// Boolean values.
    Bool(Vec<bool>),
}

impl TypedValues {
    /// Creates an empty sequence of the given kind.
    pub fn empty(kind: ValueKind) -> Self {
        match kind {
            ValueKind::String => TypedValues::String(Vec::new()),
            ValueKind::Int32 => TypedValues::Int32(Vec::new()),
            ValueKind::Int64 => TypedValues::Int64(Vec::new()),
            ValueKind::Float64 => TypedValues::Float64(Vec::new()),
            ValueKind::Bool => TypedValues::Bool(Vec::new()),
        }
    }

    /// Returns the kind tag of this sequence.
    pub fn kind(&self) -> ValueKind {
        match self {
            TypedValues::String(_) => ValueKind::String,
            TypedValues::Int32(_) => ValueKind::Int32,
            TypedValues::Int64(_) => ValueKind::Int64,
            TypedValues::Float64(_) => ValueKind::Float64,
            TypedValues::Bool(_) => ValueKind::Bool,
        }
    }

    /// Number of values in the sequence.
    pub fn len(&self) -> usize {
        match self {
            TypedValues::String(v) => v.len(),
            TypedValues::Int32(v) => v.len(),
            TypedValues::Int64(v) => v.len(),
            TypedValues::Float64(v) => v.len(),
            TypedValues::Bool(v) => v.len(),
        }
    }

    /// Whether the sequence holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders each value as a display string, in order.
    ///
    /// Used by the help renderer to print choice sets and defaults.
    pub fn display_items(&self) -> Vec<String> {
        match self {
            TypedValues::String(v) => v.clone(),
            TypedValues::Int32(v) => v.iter().map(i32::to_string).collect(),
            TypedValues::Int64(v) => v.iter().map(i64::to_string).collect(),
            TypedValues::Float64(v) => v.iter().map(f64::to_string).collect(),
            TypedValues::Bool(v) => v.iter().map(bool::to_string).collect(),
        }
    }
}

/// One declared argument.
///
/// An argument is identified either by a positional name or by a
/// short/long name pair (at least one of the two), never both. Named
/// arguments are matched against input tokens with the configured
/// prefix applied: one prefix character for the short name, two for
/// the long name. Names are declared without the prefix.
///
/// Constructors set the common shape; the consuming `with_*` setters
/// fill in the rest. Type agreement between `kind` and any choice or
/// default payload is checked when the spec is registered, not here.
///
/// # Examples
///
/// ```
/// use argot_core::{ArgumentSpec, Arity, TypedValues, ValueKind};
///
/// // A required named argument: -c N / --count N
/// let count = ArgumentSpec::named(Some("c"), Some("count"), ValueKind::Int32)
///     .with_help("How many items to emit.");
/// assert_eq!(count.display_name(), "count");
/// assert!(count.required);
///
/// // An optional positional with a default
/// let input = ArgumentSpec::positional("input", ValueKind::String)
///     .optional()
///     .with_default(TypedValues::String(vec!["-".into()]));
/// assert!(input.is_positional());
/// assert!(!input.required);
///
/// // A flag
/// let verbose = ArgumentSpec::flag(Some("v"), Some("verbose"));
/// assert!(verbose.arity.is_flag());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Positional name; a positional spec carries no short/long name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positional: Option<String>,
    /// Short name, matched under a single prefix character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Long name, matched under a doubled prefix character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    /// How many value tokens this argument consumes.
    pub arity: Arity,
    /// Declared value type.
    pub kind: ValueKind,
    /// Whether the argument must appear in the input (or carry a default).
    pub required: bool,
    /// Closed set of allowed values, kind-homogeneous with `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<TypedValues>,
    /// Values substituted when the argument is absent from the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<TypedValues>,
    /// Help text shown by the renderer; no parsing effect.
    #[serde(default)]
    pub help: String,
}

impl ArgumentSpec {
    /// Creates a required named argument consuming one value token.
    ///
    /// At least one of `short`/`long` should be given; a spec with no
    /// name at all is rejected at registration.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{ArgumentSpec, Arity, ValueKind};
    ///
    /// let spec = ArgumentSpec::named(None, Some("output"), ValueKind::String);
    /// assert_eq!(spec.arity, Arity::Exact(1));
    /// assert_eq!(spec.display_name(), "output");
    /// ```
    pub fn named(short: Option<&str>, long: Option<&str>, kind: ValueKind) -> Self {
        Self {
            positional: None,
            short: short.map(String::from),
            long: long.map(String::from),
            arity: Arity::Exact(1),
            kind,
            required: true,
            choices: None,
            default: None,
            help: String::new(),
        }
    }

    /// Creates a required positional argument consuming one token.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{ArgumentSpec, ValueKind};
    ///
    /// let spec = ArgumentSpec::positional("source", ValueKind::String);
    /// assert!(spec.is_positional());
    /// assert!(spec.required);
    /// ```
    pub fn positional(name: &str, kind: ValueKind) -> Self {
        Self {
            positional: Some(name.to_string()),
            short: None,
            long: None,
            arity: Arity::Exact(1),
            kind,
            required: true,
            choices: None,
            default: None,
            help: String::new(),
        }
    }

    /// Creates an optional flag: a named presence marker with no value
    /// tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{ArgumentSpec, Arity, ValueKind};
    ///
    /// let spec = ArgumentSpec::flag(Some("v"), Some("verbose"));
    /// assert_eq!(spec.arity, Arity::Exact(0));
    /// assert_eq!(spec.kind, ValueKind::Bool);
    /// assert!(!spec.required);
    /// ```
    pub fn flag(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            positional: None,
            short: short.map(String::from),
            long: long.map(String::from),
            arity: Arity::Exact(0),
            kind: ValueKind::Bool,
            required: false,
            choices: None,
            default: None,
            help: String::new(),
        }
    }

    /// Sets the arity.
    pub fn with_arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Sets the closed choice set.
    pub fn with_choices(mut self, choices: TypedValues) -> Self {
        self.choices = Some(choices);
        self
    }

    /// Sets the default value sequence.
    pub fn with_default(mut self, default: TypedValues) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets the help text.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = help.to_string();
        self
    }

    /// Marks the argument as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Marks the argument as required.
    pub fn require(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether this spec is identified by a positional name.
    pub fn is_positional(&self) -> bool {
        self.positional.is_some()
    }

    /// Name used in messages and help (long form preferred, then short,
    /// then positional).
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{ArgumentSpec, ValueKind};
    ///
    /// let both = ArgumentSpec::named(Some("c"), Some("count"), ValueKind::Int32);
    /// assert_eq!(both.display_name(), "count");
    ///
    /// let short_only = ArgumentSpec::named(Some("c"), None, ValueKind::Int32);
    /// assert_eq!(short_only.display_name(), "c");
    /// ```
    pub fn display_name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .or(self.positional.as_deref())
            .unwrap_or("unknown")
    }
}
