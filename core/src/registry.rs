//! Ordered collection of declared argument specifications.
//!
//! The registry owns every [`ArgumentSpec`] in declaration order and
//! assigns each one a stable slot index. Slot indices are the only
//! internal join key: names resolve to slots, never the reverse. The
//! registry is mutated only while the specification is being built;
//! parsing reads it through shared references.

use std::collections::HashMap;

use crate::{ArgumentSpec, Arity, ConfigurationError, validate_spec};

/// Declaration-ordered argument specifications with name indices.
///
/// # Examples
///
/// ```
/// use argot_core::{ArgumentSpec, Registry, ValueKind};
///
/// let mut registry = Registry::new();
/// let slot = registry
///     .declare(ArgumentSpec::named(Some("o"), Some("output"), ValueKind::String))
///     .unwrap();
/// assert_eq!(slot, 0);
///
/// registry
///     .declare(ArgumentSpec::positional("input", ValueKind::String))
///     .unwrap();
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.positional_slots(), &[1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    specs: Vec<ArgumentSpec>,
    short_slots: HashMap<String, usize>,
    long_slots: HashMap<String, usize>,
    positional_name_slots: HashMap<String, usize>,
    positional_order: Vec<usize>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an already-assembled spec list.
    ///
    /// Every declaration check runs as if the specs had been declared
    /// one by one, so a list deserialized from JSON goes through the
    /// same validation as a hand-built one.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{ArgumentSpec, Registry, ValueKind};
    ///
    /// let specs = vec![
    ///     ArgumentSpec::flag(Some("v"), Some("verbose")),
    ///     ArgumentSpec::positional("input", ValueKind::String),
    /// ];
    /// let registry = Registry::from_specs(specs).unwrap();
    /// assert_eq!(registry.len(), 2);
    /// ```
    pub fn from_specs(specs: Vec<ArgumentSpec>) -> Result<Self, ConfigurationError> {
        let mut registry = Self::new();
        for spec in specs {
            registry.declare(spec)?;
        }
        Ok(registry)
    }

    /// Declares one spec, returning its slot index.
    ///
    /// Runs the structural checks from [`validate_spec`], then enforces
    /// name uniqueness per namespace (short, long, positional) and the
    /// single required variadic positional rule.
    pub fn declare(&mut self, spec: ArgumentSpec) -> Result<usize, ConfigurationError> {
        validate_spec(&spec)?;

        if let Some(short) = &spec.short {
            if self.short_slots.contains_key(short) {
                return Err(ConfigurationError::DuplicateShortName(short.clone()));
            }
        }
        if let Some(long) = &spec.long {
            if self.long_slots.contains_key(long) {
                return Err(ConfigurationError::DuplicateLongName(long.clone()));
            }
        }
        if let Some(name) = &spec.positional {
            if self.positional_name_slots.contains_key(name) {
                return Err(ConfigurationError::DuplicatePositionalName(name.clone()));
            }
            if spec.required && spec.arity == Arity::AtLeastOne && self.has_variadic_positional()
            {
                return Err(ConfigurationError::SecondVariadicPositional(name.clone()));
            }
        }

        let slot = self.specs.len();
        if let Some(short) = &spec.short {
            self.short_slots.insert(short.clone(), slot);
        }
        if let Some(long) = &spec.long {
            self.long_slots.insert(long.clone(), slot);
        }
        if let Some(name) = &spec.positional {
            self.positional_name_slots.insert(name.clone(), slot);
            self.positional_order.push(slot);
        }
        self.specs.push(spec);
        Ok(slot)
    }

    /// All specs in declaration order; a spec's index is its slot.
    pub fn specs(&self) -> &[ArgumentSpec] {
        &self.specs
    }

    /// Number of declared specs.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no specs have been declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Spec at the given slot, if any.
    pub fn get(&self, slot: usize) -> Option<&ArgumentSpec> {
        self.specs.get(slot)
    }

    /// Slots of positional specs, in declaration order.
    pub fn positional_slots(&self) -> &[usize] {
        &self.positional_order
    }

    /// Whether a short name is taken.
    pub fn has_short(&self, name: &str) -> bool {
        self.short_slots.contains_key(name)
    }

    /// Whether a long name is taken.
    pub fn has_long(&self, name: &str) -> bool {
        self.long_slots.contains_key(name)
    }

    fn has_variadic_positional(&self) -> bool {
        self.positional_order.iter().any(|&slot| {
            let spec = &self.specs[slot];
            spec.required && spec.arity == Arity::AtLeastOne
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ValueKind;

    use super::*;

    #[test]
    fn test_slots_follow_declaration_order() {
        let mut registry = Registry::new();
        let a = registry
            .declare(ArgumentSpec::named(Some("a"), None, ValueKind::String))
            .unwrap();
        let b = registry
            .declare(ArgumentSpec::positional("input", ValueKind::String))
            .unwrap();
        let c = registry
            .declare(ArgumentSpec::named(None, Some("out"), ValueKind::String))
            .unwrap();

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(registry.positional_slots(), &[1]);
    }

    #[test]
    fn test_rejects_duplicate_short_name() {
        let mut registry = Registry::new();
        registry
            .declare(ArgumentSpec::named(Some("c"), Some("count"), ValueKind::Int32))
            .unwrap();

        let err = registry
            .declare(ArgumentSpec::named(Some("c"), Some("color"), ValueKind::String))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateShortName("c".into()));
    }

    #[test]
    fn test_rejects_duplicate_long_name() {
        let mut registry = Registry::new();
        registry
            .declare(ArgumentSpec::named(None, Some("count"), ValueKind::Int32))
            .unwrap();

        let err = registry
            .declare(ArgumentSpec::named(Some("n"), Some("count"), ValueKind::Int64))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateLongName("count".into()));
    }

    #[test]
    fn test_rejects_duplicate_positional_name() {
        let mut registry = Registry::new();
        registry
            .declare(ArgumentSpec::positional("input", ValueKind::String))
            .unwrap();

        let err = registry
            .declare(ArgumentSpec::positional("input", ValueKind::String))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DuplicatePositionalName("input".into())
        );
    }

    #[test]
    fn test_rejects_second_required_variadic_positional() {
        let mut registry = Registry::new();
        registry
            .declare(
                ArgumentSpec::positional("files", ValueKind::String)
                    .with_arity(Arity::AtLeastOne),
            )
            .unwrap();

        let err = registry
            .declare(
                ArgumentSpec::positional("more", ValueKind::String)
                    .with_arity(Arity::AtLeastOne),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::SecondVariadicPositional("more".into())
        );
    }

    #[test]
    fn test_from_specs_runs_declaration_checks() {
        let specs = vec![
            ArgumentSpec::named(Some("x"), None, ValueKind::String),
            ArgumentSpec::named(Some("x"), None, ValueKind::String),
        ];

        let err = Registry::from_specs(specs).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateShortName("x".into()));
    }

    #[test]
    fn test_spec_list_deserialized_from_json() {
        let json = r#"[
            {"short": "v", "long": "verbose", "arity": {"Exact": 0}, "kind": "Bool", "required": false},
            {"positional": "input", "arity": {"Exact": 1}, "kind": "String", "required": true}
        ]"#;
        let specs: Vec<ArgumentSpec> = serde_json::from_str(json).unwrap();
        let registry = Registry::from_specs(specs).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.has_short("v"));
        assert!(registry.has_long("verbose"));
        assert_eq!(registry.positional_slots(), &[1]);
    }
}
