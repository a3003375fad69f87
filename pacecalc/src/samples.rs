//! Sample expressions shown to first-time users

use crate::{tokenize, Calculation, UnitSystem};

pub const SAMPLE_EXPRESSIONS: [&str; 7] = [
    "5km in 25min",
    "4:25 for 20min 30s",
    "M in 3:40h",
    "HM in 72:30min",
    "6 min/mi for 10km",
    "12.5 km at 3:46 min/km",
    "4:30 for 12 min in 10 min",
];

/// Every sample, tokenized and evaluated under `units`
pub fn samples(units: UnitSystem) -> Vec<Calculation> {
    SAMPLE_EXPRESSIONS
        .iter()
        .map(|expression| tokenize(expression, units))
        .collect()
}
