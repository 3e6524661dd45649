//! Named-argument token resolution.
//!
//! The resolver is a token-to-slot table derived once per parse call
//! from the immutable registry: declared short names under one prefix
//! character, long names under two, the synthesized help flag, and —
//! when abbreviation is enabled — derived single-letter short names for
//! long-only arguments whose first letter is unambiguous.

use std::collections::HashMap;

use argot_core::ArgumentSpec;
use tracing::debug;

/// Exact-match lookup from full input tokens to slot indices.
pub(crate) struct NameResolver {
    entries: HashMap<String, usize>,
}

impl NameResolver {
    /// Builds the table for one parse call.
    ///
    /// `specs` holds the declared specs followed by the synthesized
    /// help spec, if any; `declared` is the number of declared ones.
    /// Abbreviations are derived from declared names only: a long-only
    /// spec gets its first letter as a short name when that letter is
    /// contained in exactly one declared short or long name across the
    /// registry, and the prefixed form is still free.
    pub(crate) fn build(
        specs: &[&ArgumentSpec],
        declared: usize,
        prefix: char,
        allow_abbreviation: bool,
    ) -> Self {
        let single = prefix.to_string();
        let double = format!("{prefix}{prefix}");

        let mut entries = HashMap::new();
        for (slot, spec) in specs.iter().enumerate() {
            if let Some(short) = &spec.short {
                entries.insert(format!("{single}{short}"), slot);
            }
            if let Some(long) = &spec.long {
                entries.insert(format!("{double}{long}"), slot);
            }
        }

        if allow_abbreviation {
            for (slot, spec) in specs.iter().enumerate().take(declared) {
                if spec.short.is_some() || spec.positional.is_some() {
                    continue;
                }
                let Some(long) = &spec.long else { continue };
                let Some(first) = long.chars().next() else { continue };

                let containing = specs[..declared]
                    .iter()
                    .flat_map(|s| [&s.short, &s.long])
                    .flatten()
                    .filter(|name| name.contains(first))
                    .count();
                if containing != 1 {
                    continue;
                }

                let token = format!("{single}{first}");
                if !entries.contains_key(&token) {
                    debug!(long = %long, token = %token, "Derived short name");
                    entries.insert(token, slot);
                }
            }
        }

        Self { entries }
    }

    /// Slot whose prefixed short or long name equals the token exactly.
    pub(crate) fn resolve(&self, token: &str) -> Option<usize> {
        self.entries.get(token).copied()
    }
}

#[cfg(test)]
mod tests {
    use argot_core::ValueKind;

    use super::*;

    fn named(short: Option<&str>, long: Option<&str>) -> ArgumentSpec {
        ArgumentSpec::named(short, long, ValueKind::String)
    }

    #[test]
    fn test_resolves_prefixed_names() {
        let spec = named(Some("c"), Some("count"));
        let specs = vec![&spec];
        let resolver = NameResolver::build(&specs, 1, '-', false);

        assert_eq!(resolver.resolve("-c"), Some(0));
        assert_eq!(resolver.resolve("--count"), Some(0));
        assert_eq!(resolver.resolve("count"), None);
        assert_eq!(resolver.resolve("--c"), None);
    }

    #[test]
    fn test_custom_prefix() {
        let spec = named(Some("c"), Some("count"));
        let specs = vec![&spec];
        let resolver = NameResolver::build(&specs, 1, '+', false);

        assert_eq!(resolver.resolve("+c"), Some(0));
        assert_eq!(resolver.resolve("++count"), Some(0));
        assert_eq!(resolver.resolve("-c"), None);
    }

    #[test]
    fn test_derives_unambiguous_abbreviation() {
        let spec = named(None, Some("zoom"));
        let specs = vec![&spec];
        let resolver = NameResolver::build(&specs, 1, '-', true);

        assert_eq!(resolver.resolve("-z"), Some(0));
    }

    #[test]
    fn test_skips_ambiguous_first_letter() {
        let zoom = named(None, Some("zoom"));
        let zero = named(None, Some("zero"));
        let specs = vec![&zoom, &zero];
        let resolver = NameResolver::build(&specs, 2, '-', true);

        assert_eq!(resolver.resolve("-z"), None);
    }

    #[test]
    fn test_letter_contained_in_other_name_blocks_abbreviation() {
        // "z" appears inside "azure", so "zoom" gets no abbreviation.
        let zoom = named(None, Some("zoom"));
        let azure = named(None, Some("azure"));
        let specs = vec![&zoom, &azure];
        let resolver = NameResolver::build(&specs, 2, '-', true);

        assert_eq!(resolver.resolve("-z"), None);
    }

    #[test]
    fn test_no_abbreviation_when_disabled() {
        let spec = named(None, Some("zoom"));
        let specs = vec![&spec];
        let resolver = NameResolver::build(&specs, 1, '-', false);

        assert_eq!(resolver.resolve("-z"), None);
    }

    #[test]
    fn test_specs_with_short_names_are_not_abbreviated() {
        let spec = named(Some("q"), Some("zoom"));
        let specs = vec![&spec];
        let resolver = NameResolver::build(&specs, 1, '-', true);

        assert_eq!(resolver.resolve("-z"), None);
        assert_eq!(resolver.resolve("-q"), Some(0));
    }
}
