//! # Pacecalc Engine
//!
//! **Pace arithmetic for runners**
//!
//! Pacecalc turns short free-text expressions such as `5km in 25min` or
//! `4:00 for 10min` into typed running quantities and computes the missing one.
//!
//! ## Quick Start
//!
//! ```rust
//! use pacecalc::{tokenize, UnitSystem};
//!
//! let calculation = tokenize("5km in 20min", UnitSystem::Metric);
//! assert!(calculation.is_ok());
//!
//! let pace = calculation.result().unwrap();
//! assert_eq!(pace.render(UnitSystem::Metric), "4:00min/km");
//! ```
//!
//! ## Core Concepts
//!
//! ### Values
//! Every token is a [`Value`]: a distance (stored in meters), a duration
//! (seconds), a pace or speed (seconds per kilometer), a dimensionless
//! constant, an operator or an error.
//!
//! ### Tokenizing
//! [`tokenize`] strips whitespace and splits the input into values by trying
//! a fixed list of matchers at each position. Unmatched input becomes an
//! error value and stops the scan.
//!
//! ### Evaluating
//! The evaluator reduces the token list to one value. `for`, `at` and `in`
//! bind before `*`, and anything else is resolved left to right.
//!
//! ### Unit systems
//! [`UnitSystem`] only affects unlabelled paces while tokenizing and how
//! values are rendered. Internal quantities never change with it.

pub mod calculation;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod render;
pub mod samples;
pub mod serializers;
pub mod units;
pub mod value;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use calculation::Calculation;
pub use error::PaceError;
pub use evaluator::calculate;
pub use parser::tokenize;
pub use render::RenderPart;
pub use serializers::{PlainCalculation, PlainValue};
pub use units::{Unit, UnitSystem};
pub use value::{Distance, DistanceName, Kind, Operator, Pace, PaceView, Value};

/// Result type for Pacecalc operations
pub type PaceResult<T> = Result<T, PaceError>;

#[cfg(test)]
mod tests;
