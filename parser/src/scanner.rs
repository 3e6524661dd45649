//! Single-pass token scanner.
//!
//! The scanner walks the input left to right exactly once, switching
//! between collecting positional tokens and filling the current named
//! argument. Positional tokens are only recognized before the first
//! named-argument token; after that boundary, unprefixed tokens are
//! value tokens for the most recently matched argument.

use argot_core::{ArgumentSpec, ParseResult};
use tracing::debug;

use crate::coerce;
use crate::error::UsageError;
use crate::lexer::is_number;
use crate::resolver::NameResolver;

/// Scan state over one token sequence.
pub(crate) struct Scanner<'a> {
    specs: &'a [&'a ArgumentSpec],
    resolver: &'a NameResolver,
    prefix: char,
    ignore_unknown: bool,
    seen_named: bool,
    current_slot: Option<usize>,
    positional: Vec<String>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(
        specs: &'a [&'a ArgumentSpec],
        resolver: &'a NameResolver,
        prefix: char,
        ignore_unknown: bool,
    ) -> Self {
        Self {
            specs,
            resolver,
            prefix,
            ignore_unknown,
            seen_named: false,
            current_slot: None,
            positional: Vec::new(),
        }
    }

    /// Feeds one token.
    ///
    /// `Ok(true)` continues the scan; `Ok(false)` means the first parse
    /// error was recorded in `result` and the scan is over. Unknown
    /// prefixed tokens surface as a hard [`UsageError`] unless the
    /// parser is configured to ignore them.
    pub(crate) fn feed(
        &mut self,
        token: &str,
        result: &mut ParseResult,
    ) -> Result<bool, UsageError> {
        if let Some(slot) = self.resolver.resolve(token) {
            let spec = self.specs[slot];
            if spec.arity.is_flag() {
                coerce::record_presence(spec, slot, result);
            }
            self.current_slot = Some(slot);
            self.seen_named = true;
            return Ok(true);
        }

        let prefixed = token.starts_with(self.prefix);

        if !self.seen_named {
            if is_number(token) || !prefixed {
                debug!(token = %token, "Collected positional token");
                self.positional.push(token.to_string());
                return Ok(true);
            }
            self.unknown(token)?;
            return Ok(true);
        }

        if prefixed {
            self.unknown(token)?;
            return Ok(true);
        }

        match self.current_slot {
            Some(slot) => {
                let spec = self.specs[slot];
                if let Err(message) = coerce::dispatch(spec, slot, token, result) {
                    result.fail(message);
                    return Ok(false);
                }
            }
            // An ignored unknown argument left no target; its value
            // tokens are dropped with it.
            None => debug!(token = %token, "Dropped value token with no target"),
        }
        Ok(true)
    }

    /// Hands the positional buffer over for distribution.
    pub(crate) fn into_positional(self) -> Vec<String> {
        self.positional
    }

    fn unknown(&mut self, token: &str) -> Result<(), UsageError> {
        if self.ignore_unknown {
            debug!(token = %token, "Ignoring unknown argument");
            self.current_slot = None;
            self.seen_named = true;
            Ok(())
        } else {
            Err(UsageError::UnknownArgument(token.to_string()))
        }
    }
}
