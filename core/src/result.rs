//! Parse outcome model.
//!
//! A [`ParseResult`] is created empty for each parse invocation, filled
//! in while tokens are scanned and distributed, and finalized exactly
//! once. It owns its maps and keeps no reference to the registry that
//! produced it; names are resolved through its own name table, built
//! up-front from every declared spec.

use std::collections::HashMap;

use crate::{TypedValues, ValueKind};

/// Accumulated values for one argument slot.
///
/// Exactly one homogeneous sequence is populated, matching `kind`. A
/// flag records presence as `count == 1` with an empty sequence.
///
/// # Examples
///
/// ```
/// use argot_core::{ParsedValue, TypedValues, ValueKind};
///
/// let value = ParsedValue {
///     exists: true,
///     kind: ValueKind::Int32,
///     count: 2,
///     values: TypedValues::Int32(vec![4, 8]),
/// };
/// assert_eq!(value.first_i32(), Some(4));
/// assert_eq!(value.as_i32s(), &[4, 8]);
/// assert_eq!(value.first_string(), None);
/// ```
#[derive(Debug, Clone)]
pub struct ParsedValue {
    /// Whether the argument appeared in the input (or was defaulted).
    pub exists: bool,
    /// Value type the slot decodes into.
    pub kind: ValueKind,
    /// Number of accumulated values (or presence markers for a flag).
    pub count: usize,
    /// The decoded values.
    pub values: TypedValues,
}

impl ParsedValue {
    /// An absent value, as returned for unknown or never-populated names.
    pub fn absent() -> Self {
        Self {
            exists: false,
            kind: ValueKind::String,
            count: 0,
            values: TypedValues::empty(ValueKind::String),
        }
    }

    /// An empty but present value of the given kind.
    pub fn present(kind: ValueKind) -> Self {
        Self {
            exists: true,
            kind,
            count: 0,
            values: TypedValues::empty(kind),
        }
    }

    /// String values; empty when the slot holds another kind.
    pub fn as_strings(&self) -> &[String] {
        match &self.values {
            TypedValues::String(v) => v,
            _ => &[],
        }
    }

    /// 32-bit integer values; empty when the slot holds another kind.
    pub fn as_i32s(&self) -> &[i32] {
        match &self.values {
            TypedValues::Int32(v) => v,
            _ => &[],
        }
    }

    /// 64-bit integer values; empty when the slot holds another kind.
    pub fn as_i64s(&self) -> &[i64] {
        match &self.values {
            TypedValues::Int64(v) => v,
            _ => &[],
        }
    }

    /// Float values; empty when the slot holds another kind.
    pub fn as_f64s(&self) -> &[f64] {
        match &self.values {
            TypedValues::Float64(v) => v,
            _ => &[],
        }
    }

    /// Bool values; empty when the slot holds another kind.
    pub fn as_bools(&self) -> &[bool] {
        match &self.values {
            TypedValues::Bool(v) => v,
            _ => &[],
        }
    }

    /// First string value, if any.
    pub fn first_string(&self) -> Option<&str> {
        self.as_strings().first().map(String::as_str)
    }

    /// First 32-bit integer value, if any.
    pub fn first_i32(&self) -> Option<i32> {
        self.as_i32s().first().copied()
    }

    /// First 64-bit integer value, if any.
    pub fn first_i64(&self) -> Option<i64> {
        self.as_i64s().first().copied()
    }

    /// First float value, if any.
    pub fn first_f64(&self) -> Option<f64> {
        self.as_f64s().first().copied()
    }

    /// First bool value, if any.
    pub fn first_bool(&self) -> Option<bool> {
        self.as_bools().first().copied()
    }
}

/// Outcome of one parse invocation.
///
/// Invalid results never expose values: the first error discards
/// everything accumulated so far, so callers must check [`is_valid`]
/// before reading any slot.
///
/// [`is_valid`]: ParseResult::is_valid
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    valid: bool,
    error: String,
    parsed: HashMap<usize, ParsedValue>,
    names: HashMap<String, usize>,
}

impl ParseResult {
    /// Creates an empty, not-yet-valid result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the parse ran to completion without errors.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// First error encountered; meaningful only when invalid.
    pub fn error_message(&self) -> &str {
        &self.error
    }

    /// Number of slots that accumulated a value.
    pub fn parsed_count(&self) -> usize {
        self.parsed.len()
    }

    /// Looks up a value by any of its declared names.
    ///
    /// Returns an absent value (`exists == false`) when the name is
    /// unknown or the slot was never populated.
    pub fn lookup(&self, name: &str) -> ParsedValue {
        self.get(name).cloned().unwrap_or_else(ParsedValue::absent)
    }

    /// Borrowing variant of [`lookup`](ParseResult::lookup).
    pub fn get(&self, name: &str) -> Option<&ParsedValue> {
        let slot = self.names.get(name)?;
        self.parsed.get(slot)
    }

    /// Registers a name for a slot in the name table.
    ///
    /// Called by the parsing engine while the result is being built.
    pub fn register_name(&mut self, name: &str, slot: usize) {
        self.names.insert(name.to_string(), slot);
    }

    /// Value accumulated at a slot, if any.
    pub fn slot(&self, slot: usize) -> Option<&ParsedValue> {
        self.parsed.get(&slot)
    }

    /// Mutable access to a slot's value, created present-and-empty on
    /// first touch.
    ///
    /// Called by the parsing engine while the result is being built.
    pub fn slot_entry(&mut self, slot: usize, kind: ValueKind) -> &mut ParsedValue {
        self.parsed
            .entry(slot)
            .or_insert_with(|| ParsedValue::present(kind))
    }

    /// Stores a fully-formed value at a slot (default materialization).
    ///
    /// Called by the parsing engine while the result is being built.
    pub fn insert_slot(&mut self, slot: usize, value: ParsedValue) {
        self.parsed.insert(slot, value);
    }

    /// Records the first error and discards all accumulated values.
    ///
    /// Later calls overwrite nothing: the first error wins.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.error.is_empty() {
            self.error = message.into();
        }
        self.parsed.clear();
        self.valid = false;
    }

    /// Marks the result valid after every reconciliation check passed.
    pub fn finalize(&mut self) {
        self.valid = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_unknown_name_is_absent() {
        let result = ParseResult::new();
        let value = result.lookup("nope");

        assert!(!value.exists);
        assert_eq!(value.count, 0);
    }

    #[test]
    fn test_lookup_registered_but_unpopulated_name_is_absent() {
        let mut result = ParseResult::new();
        result.register_name("count", 0);

        assert!(!result.lookup("count").exists);
        assert!(result.get("count").is_none());
    }

    #[test]
    fn test_slot_entry_accumulates() {
        let mut result = ParseResult::new();
        result.register_name("count", 0);
        {
            let entry = result.slot_entry(0, ValueKind::Int32);
            if let TypedValues::Int32(values) = &mut entry.values {
                values.push(5);
            }
            entry.count += 1;
        }

        let value = result.lookup("count");
        assert!(value.exists);
        assert_eq!(value.count, 1);
        assert_eq!(value.first_i32(), Some(5));
    }

    #[test]
    fn test_fail_discards_values_and_keeps_first_error() {
        let mut result = ParseResult::new();
        result.register_name("count", 0);
        result.slot_entry(0, ValueKind::Int32).count += 1;

        result.fail("first error");
        result.fail("second error");

        assert!(!result.is_valid());
        assert_eq!(result.error_message(), "first error");
        assert_eq!(result.parsed_count(), 0);
        assert!(!result.lookup("count").exists);
    }

    #[test]
    fn test_typed_accessors_ignore_other_kinds() {
        let value = ParsedValue {
            exists: true,
            kind: ValueKind::Bool,
            count: 1,
            values: TypedValues::Bool(vec![true]),
        };

        assert_eq!(value.first_bool(), Some(true));
        assert!(value.as_i32s().is_empty());
        assert!(value.as_strings().is_empty());
    }
}
