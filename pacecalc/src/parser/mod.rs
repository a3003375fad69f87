pub mod matchers;
mod scan;

use crate::evaluator::calculate;
use crate::units::UnitSystem;
use crate::value::Value;
use crate::Calculation;
use matchers::{Match, MATCHERS};
use tracing::{debug, trace};

/// Tokenize an expression and evaluate it.
///
/// Whitespace is dropped first; tokens are separated by adjacency alone, so
/// `4:00 for 4min` and `4:00for4min` are the same input. When no matcher
/// accepts the remaining text it becomes a single error token, tokenizing
/// stops and no result is computed.
pub fn tokenize(input: &str, units: UnitSystem) -> Calculation {
    let sanitized: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parts = Vec::new();
    let mut remaining = sanitized.as_str();

    while !remaining.is_empty() {
        match match_token(remaining, units) {
            Some((value, rest)) => {
                trace!(token = ?value, rest, "matched token");
                parts.push(value);
                remaining = rest;
            }
            None => {
                debug!(unmatched = remaining, "no matcher accepts input");
                parts.push(Value::error(remaining));
                return Calculation::new(parts, None);
            }
        }
    }

    let result = calculate(&parts);
    Calculation::new(parts, result)
}

/// Try every matcher in order at the start of `input`
pub fn match_token(input: &str, units: UnitSystem) -> Match<'_> {
    MATCHERS.iter().find_map(|(name, matcher)| {
        let found = matcher(input, units);
        if found.is_some() {
            trace!(matcher = name, "matcher accepted input");
        }
        found
    })
}
