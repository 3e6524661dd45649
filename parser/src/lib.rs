//! Token parsing engine for declarative command-line specifications.
//!
//! This crate turns a raw token sequence into typed, validated values
//! against a declared [`argot_core`] specification. One parse call runs
//! a single left-to-right scan, distributes buffered positional tokens
//! across the positional specs, coerces every assigned token to its
//! declared type, and reconciles arities, defaults, and required
//! arguments. The first validation failure wins: the result carries
//! exactly one error and no values.
//!
//! # Example
//!
//! ```
//! use argot_core::{ArgumentSpec, Arity, ValueKind};
//! use argot_parser::Parser;
//!
//! let mut parser = Parser::new("copytool");
//! parser.declare(
//!     ArgumentSpec::flag(Some("v"), Some("verbose")).with_help("Chatty output."),
//! ).unwrap();
//! parser.declare(
//!     ArgumentSpec::named(Some("c"), Some("count"), ValueKind::Int32).optional(),
//! ).unwrap();
//! parser.declare(ArgumentSpec::positional("src", ValueKind::String)).unwrap();
//! parser.declare(
//!     ArgumentSpec::positional("files", ValueKind::String).with_arity(Arity::AtLeastOne),
//! ).unwrap();
//!
//! let result = parser.parse(["a.txt", "b.txt", "c.txt", "--count", "2"]).unwrap();
//! assert!(result.is_valid());
//! assert_eq!(result.lookup("src").first_string(), Some("a.txt"));
//! assert_eq!(result.lookup("files").as_strings(), &["b.txt", "c.txt"]);
//! assert_eq!(result.lookup("count").first_i32(), Some(2));
//! assert!(!result.lookup("verbose").exists);
//! ```
//!
//! # Error channels
//!
//! Configuration mistakes fail [`Parser::declare`] with a
//! [`ConfigurationError`](argot_core::ConfigurationError); an unknown
//! prefixed token fails [`Parser::parse`] itself with a hard
//! [`UsageError`] (unless the parser is configured to ignore unknowns).
//! Everything else — wrong types, out-of-choice values, wrong counts,
//! missing required arguments — comes back inside an invalid
//! [`ParseResult`](argot_core::ParseResult).

pub mod help;
pub mod lexer;

mod coerce;
mod error;
mod positional;
mod resolver;
mod scanner;

use argot_core::{ArgumentSpec, ConfigurationError, ParseResult, ParsedValue, Registry};
use tracing::debug;

use crate::resolver::NameResolver;
use crate::scanner::Scanner;

pub use error::{Result, UsageError};

/// Behavior switches applied to every parse call.
///
/// # Examples
///
/// ```
/// use argot_parser::ParserConfig;
///
/// let config = ParserConfig::default();
/// assert!(config.allow_abbreviation);
/// assert!(!config.ignore_unknown);
/// assert!(config.add_help);
/// assert_eq!(config.prefix, '-');
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    /// Derive unambiguous single-letter short names for long-only
    /// arguments.
    pub allow_abbreviation: bool,
    /// Discard unknown prefixed tokens instead of failing hard.
    pub ignore_unknown: bool,
    /// Synthesize a `-h`/`--help` flag unless both names are declared.
    pub add_help: bool,
    /// Prefix character: one for short names, doubled for long names.
    pub prefix: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            allow_abbreviation: true,
            ignore_unknown: false,
            add_help: true,
            prefix: '-',
        }
    }
}

/// A declared specification plus configuration, ready to parse token
/// sequences.
///
/// The specification is built up through [`declare`](Parser::declare)
/// before parsing; parse calls take `&self` and allocate their own
/// state, so a built parser can serve any number of parses, including
/// concurrently.
#[derive(Debug, Clone)]
pub struct Parser {
    name: String,
    description: String,
    epilog: String,
    config: ParserConfig,
    registry: Registry,
}

impl Parser {
    /// Creates a parser with the given program name and default
    /// configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            epilog: String::new(),
            config: ParserConfig::default(),
            registry: Registry::new(),
        }
    }

    /// Sets the text rendered between the usage line and the argument
    /// listings.
    pub fn with_description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    /// Sets the text rendered after the argument listings.
    pub fn with_epilog(mut self, text: &str) -> Self {
        self.epilog = text.to_string();
        self
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the registry with an already-built one (for example
    /// from [`Registry::from_specs`]).
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Program name shown in help.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description text, possibly empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Epilog text, possibly empty.
    pub fn epilog(&self) -> &str {
        &self.epilog
    }

    /// The active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The declared specification.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Declares one argument specification.
    pub fn declare(&mut self, spec: ArgumentSpec) -> std::result::Result<(), ConfigurationError> {
        self.registry.declare(spec).map(|_| ())
    }

    /// Parses a token sequence into a [`ParseResult`].
    ///
    /// The sequence holds the arguments only — no program name. An
    /// unknown prefixed token aborts with a hard [`UsageError`] when
    /// unknowns are not ignored; every other failure is reported inside
    /// the returned result.
    pub fn parse<I, S>(&self, tokens: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let help_spec = self.implicit_help_spec();
        let mut specs: Vec<&ArgumentSpec> = self.registry.specs().iter().collect();
        if let Some(spec) = &help_spec {
            specs.push(spec);
        }

        let resolver = NameResolver::build(
            &specs,
            self.registry.len(),
            self.config.prefix,
            self.config.allow_abbreviation,
        );

        let mut result = ParseResult::new();
        for (slot, spec) in specs.iter().enumerate() {
            for name in [&spec.positional, &spec.short, &spec.long]
                .into_iter()
                .flatten()
            {
                result.register_name(name, slot);
            }
        }

        let mut scanner = Scanner::new(
            &specs,
            &resolver,
            self.config.prefix,
            self.config.ignore_unknown,
        );
        for token in tokens {
            if !scanner.feed(token.as_ref(), &mut result)? {
                return Ok(result);
            }
        }

        let buffer = scanner.into_positional();
        let positionals: Vec<(usize, &ArgumentSpec)> = self
            .registry
            .positional_slots()
            .iter()
            .map(|&slot| (slot, &self.registry.specs()[slot]))
            .collect();
        if !positional::distribute(&buffer, &positionals, &mut result) {
            return Ok(result);
        }

        reconcile(&specs, &mut result);
        Ok(result)
    }

    /// Parses the process arguments, skipping the program-name slot.
    pub fn parse_from_env(&self) -> Result<ParseResult> {
        self.parse(std::env::args().skip(1))
    }

    /// Renders help with default width settings.
    pub fn help(&self) -> String {
        help::render(self)
    }

    /// Renders help with an explicit width and name-column share.
    pub fn help_with(&self, width: usize, name_width_percent: usize) -> String {
        help::render_with(self, width, name_width_percent)
    }

    /// The synthesized help flag, when enabled and at least one of its
    /// names is still free. It lives at the virtual slot one past the
    /// declared specs and is never stored in the registry.
    pub(crate) fn implicit_help_spec(&self) -> Option<ArgumentSpec> {
        if !self.config.add_help {
            return None;
        }
        let short_taken = self.registry.has_short("h");
        let long_taken = self.registry.has_long("help");
        if short_taken && long_taken {
            return None;
        }
        let mut spec =
            ArgumentSpec::flag(None, None).with_help("Show this help message and exit.");
        if !short_taken {
            spec.short = Some("h".into());
        }
        if !long_taken {
            spec.long = Some("help".into());
        }
        Some(spec)
    }
}

/// Final pass over every spec: arity satisfaction for present slots,
/// default materialization, and required-argument enforcement.
fn reconcile(specs: &[&ArgumentSpec], result: &mut ParseResult) {
    for (slot, spec) in specs.iter().enumerate() {
        let present = result.slot(slot).map(|value| value.count);
        match present {
            Some(count) => {
                if !spec.arity.accepts_count(count) {
                    result.fail(format!(
                        "wrong arguments count for '{}': got {count}",
                        spec.display_name()
                    ));
                    return;
                }
            }
            None => {
                if let Some(default) = &spec.default {
                    debug!(name = %spec.display_name(), "Substituting default");
                    result.insert_slot(
                        slot,
                        ParsedValue {
                            exists: true,
                            kind: spec.kind,
                            count: default.len(),
                            values: default.clone(),
                        },
                    );
                } else if spec.required {
                    result.fail(format!(
                        "required argument '{}' doesn't exist",
                        spec.display_name()
                    ));
                    return;
                }
            }
        }
    }
    result.finalize();
}
