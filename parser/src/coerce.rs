//! Per-token type coercion and value validation.
//!
//! Every token assigned to an argument — by the scanner or by the
//! positional distributor — passes through [`dispatch`]. Coercion
//! converts the token to the declared value type, checks choice-set
//! membership, and appends the decoded value to the slot. Failures
//! return the message that becomes the parse's first error.

use argot_core::{ArgumentSpec, ParseResult, TypedValues, ValueKind};

use crate::lexer::is_number;

/// Records a flag's presence marker for its own token.
///
/// No value payload is stored; the marker bumps the slot count so a
/// repeated flag shows up in the final count check.
pub(crate) fn record_presence(spec: &ArgumentSpec, slot: usize, result: &mut ParseResult) {
    result.slot_entry(slot, spec.kind).count += 1;
}

/// Coerces one value token against a spec and accumulates it.
///
/// Numeric kinds are gated by the number lexer before conversion, so
/// overflow and malformed tokens both report "cannot parse". Float
/// choices compare with an epsilon bound, integer and string choices
/// exactly.
pub(crate) fn dispatch(
    spec: &ArgumentSpec,
    slot: usize,
    token: &str,
    result: &mut ParseResult,
) -> Result<(), String> {
    if spec.arity.is_flag() {
        return Err(format!(
            "too many arguments for '{}'",
            spec.display_name()
        ));
    }

    match spec.kind {
        ValueKind::String => {
            if let Some(TypedValues::String(choices)) = &spec.choices {
                if !choices.iter().any(|choice| choice == token) {
                    return Err(out_of_choices(spec, token));
                }
            }
            if let TypedValues::String(values) =
                &mut result.slot_entry(slot, spec.kind).values
            {
                values.push(token.to_string());
            }
        }
        ValueKind::Bool => {
            let value = if token.eq_ignore_ascii_case("true") {
                true
            } else if token.eq_ignore_ascii_case("false") {
                false
            } else {
                return Err(cannot_parse(spec, token));
            };
            if let TypedValues::Bool(values) = &mut result.slot_entry(slot, spec.kind).values {
                values.push(value);
            }
        }
        ValueKind::Int32 => {
            if !is_number(token) {
                return Err(cannot_parse(spec, token));
            }
            let value: i32 = token.parse().map_err(|_| cannot_parse(spec, token))?;
            if let Some(TypedValues::Int32(choices)) = &spec.choices {
                if !choices.contains(&value) {
                    return Err(out_of_choices(spec, token));
                }
            }
            if let TypedValues::Int32(values) = &mut result.slot_entry(slot, spec.kind).values {
                values.push(value);
            }
        }
        ValueKind::Int64 => {
            if !is_number(token) {
                return Err(cannot_parse(spec, token));
            }
            let value: i64 = token.parse().map_err(|_| cannot_parse(spec, token))?;
            if let Some(TypedValues::Int64(choices)) = &spec.choices {
                if !choices.contains(&value) {
                    return Err(out_of_choices(spec, token));
                }
            }
            if let TypedValues::Int64(values) = &mut result.slot_entry(slot, spec.kind).values {
                values.push(value);
            }
        }
        ValueKind::Float64 => {
            if !is_number(token) {
                return Err(cannot_parse(spec, token));
            }
            let value: f64 = token.parse().map_err(|_| cannot_parse(spec, token))?;
            if let Some(TypedValues::Float64(choices)) = &spec.choices {
                let near = choices
                    .iter()
                    .any(|choice| (choice - value).abs() <= f64::EPSILON);
                if !near {
                    return Err(out_of_choices(spec, token));
                }
            }
            if let TypedValues::Float64(values) =
                &mut result.slot_entry(slot, spec.kind).values
            {
                values.push(value);
            }
        }
    }

    result.slot_entry(slot, spec.kind).count += 1;
    Ok(())
}

fn cannot_parse(spec: &ArgumentSpec, token: &str) -> String {
    format!("cannot parse '{token}' for '{}'", spec.display_name())
}

fn out_of_choices(spec: &ArgumentSpec, token: &str) -> String {
    format!(
        "value '{token}' is out of choices for '{}'",
        spec.display_name()
    )
}

#[cfg(test)]
mod tests {
    use argot_core::ArgumentSpec;

    use super::*;

    fn dispatch_one(spec: &ArgumentSpec, token: &str) -> Result<ParseResult, String> {
        let mut result = ParseResult::new();
        dispatch(spec, 0, token, &mut result)?;
        Ok(result)
    }

    #[test]
    fn test_string_accumulates_as_is() {
        let spec = ArgumentSpec::named(None, Some("name"), ValueKind::String);
        let result = dispatch_one(&spec, "hello").unwrap();

        let value = result.slot(0).unwrap();
        assert_eq!(value.count, 1);
        assert_eq!(value.first_string(), Some("hello"));
    }

    #[test]
    fn test_string_choice_membership() {
        let spec = ArgumentSpec::named(None, Some("format"), ValueKind::String)
            .with_choices(TypedValues::String(vec!["json".into(), "text".into()]));

        assert!(dispatch_one(&spec, "json").is_ok());
        let err = dispatch_one(&spec, "yaml").unwrap_err();
        assert!(err.contains("out of choices"));
    }

    #[test]
    fn test_bool_is_case_insensitive() {
        let spec = ArgumentSpec::named(None, Some("active"), ValueKind::Bool);

        for token in ["true", "TRUE", "True", "tRuE"] {
            let result = dispatch_one(&spec, token).unwrap();
            assert_eq!(result.slot(0).unwrap().first_bool(), Some(true));
        }
        let result = dispatch_one(&spec, "FALSE").unwrap();
        assert_eq!(result.slot(0).unwrap().first_bool(), Some(false));

        let err = dispatch_one(&spec, "yes").unwrap_err();
        assert!(err.contains("cannot parse"));
    }

    #[test]
    fn test_int_parses_and_rejects() {
        let spec = ArgumentSpec::named(None, Some("count"), ValueKind::Int32);

        let result = dispatch_one(&spec, "-12").unwrap();
        assert_eq!(result.slot(0).unwrap().first_i32(), Some(-12));

        assert!(dispatch_one(&spec, "twelve").unwrap_err().contains("cannot parse"));
        // Fractional tokens do not truncate into integers.
        assert!(dispatch_one(&spec, "1.5").unwrap_err().contains("cannot parse"));
    }

    #[test]
    fn test_int_overflow_is_cannot_parse() {
        let spec = ArgumentSpec::named(None, Some("count"), ValueKind::Int32);

        let err = dispatch_one(&spec, "4294967296").unwrap_err();
        assert!(err.contains("cannot parse"));
    }

    #[test]
    fn test_int64_covers_wider_range() {
        let spec = ArgumentSpec::named(None, Some("offset"), ValueKind::Int64);

        let result = dispatch_one(&spec, "4294967296").unwrap();
        assert_eq!(result.slot(0).unwrap().first_i64(), Some(4_294_967_296));
    }

    #[test]
    fn test_int_choice_membership_is_exact() {
        let spec = ArgumentSpec::named(None, Some("level"), ValueKind::Int32)
            .with_choices(TypedValues::Int32(vec![1, 2, 3]));

        assert!(dispatch_one(&spec, "2").is_ok());
        let err = dispatch_one(&spec, "9").unwrap_err();
        assert!(err.contains("out of choices"));
    }

    #[test]
    fn test_float_choice_uses_epsilon() {
        let spec = ArgumentSpec::named(None, Some("ratio"), ValueKind::Float64)
            .with_choices(TypedValues::Float64(vec![0.5, 1.5]));

        assert!(dispatch_one(&spec, "1.5").is_ok());
        assert!(dispatch_one(&spec, "1.6").unwrap_err().contains("out of choices"));
    }

    #[test]
    fn test_float_rejects_integer_exponent_form() {
        let spec = ArgumentSpec::named(None, Some("ratio"), ValueKind::Float64);

        assert!(dispatch_one(&spec, "1.0e3").is_ok());
        // Lexer quirk: exponent without a decimal point is rejected.
        assert!(dispatch_one(&spec, "1e3").unwrap_err().contains("cannot parse"));
    }

    #[test]
    fn test_value_token_at_flag_is_too_many() {
        let spec = ArgumentSpec::flag(Some("v"), Some("verbose"));

        let err = dispatch_one(&spec, "anything").unwrap_err();
        assert!(err.contains("too many arguments"));
    }

    #[test]
    fn test_presence_marker_counts_once() {
        let spec = ArgumentSpec::flag(Some("v"), Some("verbose"));
        let mut result = ParseResult::new();
        record_presence(&spec, 0, &mut result);

        let value = result.slot(0).unwrap();
        assert!(value.exists);
        assert_eq!(value.count, 1);
        assert!(value.values.is_empty());
    }
}
