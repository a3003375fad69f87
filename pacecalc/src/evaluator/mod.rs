//! Reduction of a token sequence to a single value
//!
//! The evaluator repeatedly picks one operator, combines it with its direct
//! neighbours through [`operations::operation`] and splices the result back
//! in, until one value is left.

pub mod operations;

use crate::value::{Operator, Value};
use tracing::debug;

pub const INVALID_OPERATION: &str = "Invalid operation";

/// Fewest tokens that can form an operation
const MIN_OPERATION_TOKENS: usize = 3;

/// Reduce `parts` to a single value.
///
/// - A lone pace or speed yields its reciprocal view.
/// - Any other sequence shorter than three tokens has nothing to compute.
/// - Otherwise operators are resolved one at a time: the leftmost `for`,
///   `at` or `in` first, then the leftmost `*`, then whichever operator
///   comes first. The first failing step is the result.
pub fn calculate(parts: &[Value]) -> Option<Value> {
    if let [Value::Pace(pace)] = parts {
        return Some(Value::Pace(pace.reciprocal()));
    }

    if parts.len() < MIN_OPERATION_TOKENS {
        return None;
    }

    let mut remaining = parts.to_vec();

    while remaining.len() > 1 {
        let Some((index, op)) = next_operator(&remaining) else {
            return Some(Value::error(INVALID_OPERATION));
        };

        if index == 0 || index + 1 >= remaining.len() {
            return Some(Value::error(INVALID_OPERATION));
        }

        let left = &remaining[index - 1];
        let right = &remaining[index + 1];
        let result = operations::operation(left, op, right);
        debug!(?left, op = op.symbol(), ?right, ?result, "resolved operator");

        if result.is_error() {
            return Some(result);
        }

        remaining.splice(index - 1..=index + 1, std::iter::once(result));
    }

    remaining.pop()
}

/// Position of the operator to resolve next
fn next_operator(parts: &[Value]) -> Option<(usize, Operator)> {
    let operators: Vec<(usize, Operator)> = parts
        .iter()
        .enumerate()
        .filter_map(|(index, part)| part.as_operator().map(|op| (index, op)))
        .collect();

    operators
        .iter()
        .find(|(_, op)| op.is_relational())
        .or_else(|| operators.iter().find(|(_, op)| op.is_multiplication()))
        .or_else(|| operators.first())
        .copied()
}
