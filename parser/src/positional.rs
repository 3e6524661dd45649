//! Positional token distribution.
//!
//! After the scan, the buffered positional tokens are allocated across
//! the declared positional specs in declaration order. Required specs
//! claim their fixed counts first; a required one-or-more spec absorbs
//! whatever the optional specs cannot take; optional specs consume one
//! token each while slack remains. Tokens are never reordered.

use argot_core::{ArgumentSpec, Arity, ParseResult};
use tracing::debug;

use crate::coerce;

/// Distributes the positional buffer, dispatching every consumed token
/// through coercion against its owning spec.
///
/// Returns `false` when the first error was recorded in `result`.
/// Counting relies on the registry admitting at most one required
/// one-or-more positional spec.
pub(crate) fn distribute(
    buffer: &[String],
    positionals: &[(usize, &ArgumentSpec)],
    result: &mut ParseResult,
) -> bool {
    if buffer.is_empty() {
        return true;
    }
    if positionals.is_empty() {
        result.fail(format!("unknown positional argument '{}'", buffer[0]));
        return false;
    }

    let mut min_required = 0usize;
    let mut optional_count = 0usize;
    let mut has_variadic = false;
    for (_, spec) in positionals {
        if spec.required {
            match spec.arity {
                Arity::AtLeastOne => {
                    min_required += 1;
                    has_variadic = true;
                }
                Arity::Exact(n) => min_required += n,
                Arity::AnyCount => {}
            }
        } else {
            optional_count += 1;
        }
    }

    if min_required > buffer.len() {
        result.fail(format!(
            "too few positional arguments: required {min_required}, got {}",
            buffer.len()
        ));
        return false;
    }

    let mut slack = buffer.len() - min_required;
    let mut variadic_extra = 0usize;
    if slack > optional_count {
        if !has_variadic {
            result.fail("too many positional arguments");
            return false;
        }
        variadic_extra = slack - optional_count;
        slack = optional_count;
    }
    debug!(min_required, slack, variadic_extra, "Distributing positional tokens");

    let mut cursor = 0usize;
    for (slot, spec) in positionals {
        let take = if spec.required {
            match spec.arity {
                Arity::AtLeastOne => 1 + variadic_extra,
                Arity::Exact(n) => n,
                Arity::AnyCount => 0,
            }
        } else if slack > 0 {
            slack -= 1;
            1
        } else {
            0
        };
        for _ in 0..take {
            if let Err(message) = coerce::dispatch(spec, *slot, &buffer[cursor], result) {
                result.fail(message);
                return false;
            }
            cursor += 1;
        }
    }

    true
}
