//! Type-aware operations between running quantities
//!
//! Handles every supported (left kind, operator, right kind) combination:
//! - Pace for Duration = Distance
//! - Pace for Distance = Duration
//! - Distance for Pace = Distance (same magnitude as Pace for Distance)
//! - Distance at Pace = Duration
//! - Duration at Pace = Distance
//! - Distance in Duration = Pace
//! - Distance or Duration * Constant, in either order
//! - Distance + Distance, Constant + Constant, Constant * Constant
//!
//! Speeds take part as paces and named distances as plain distances.
//!
//! # Examples
//! ```text
//! 4:00 for 10min = 2.5km
//! 5km at 5:00 = 25min
//! 5km in 20min = 4:00min/km
//! 5km * 2 = 10km
//! ```

use crate::units::METERS_PER_KM;
use crate::value::{Distance, Operator, Pace, Value};

pub const UNKNOWN_OPERATION: &str = "Unknown operation";
pub const DIVISION_BY_ZERO: &str = "Division by zero";
pub const OUT_OF_RANGE: &str = "Result out of range";

/// Combine two operands. Unsupported combinations yield an error value.
pub fn operation(left: &Value, op: Operator, right: &Value) -> Value {
    use Operator::{Add, At, For, In, Multiply};

    let result = match (left, op, right) {
        (Value::Pace(pace), For, Value::Duration(seconds)) => duration_at_pace(*seconds, pace),
        (Value::Pace(pace), For, Value::Distance(distance)) => distance_at_pace(distance, pace),
        // Kept as observed: same formula as Pace for Distance, but the
        // rounded seconds come back tagged as a distance.
        (Value::Distance(distance), For, Value::Pace(pace)) => {
            Value::Distance(Distance::new(seconds_for_distance(distance, pace)))
        }
        (Value::Distance(distance), At, Value::Pace(pace)) => distance_at_pace(distance, pace),
        (Value::Duration(seconds), At, Value::Pace(pace)) => duration_at_pace(*seconds, pace),
        (Value::Distance(distance), In, Value::Duration(seconds)) => {
            distance_in_duration(distance, *seconds)
        }

        (Value::Distance(distance), Multiply, Value::Constant(factor))
        | (Value::Constant(factor), Multiply, Value::Distance(distance)) => {
            Value::Distance(Distance::new(distance.meters() * factor))
        }
        (Value::Duration(seconds), Multiply, Value::Constant(factor))
        | (Value::Constant(factor), Multiply, Value::Duration(seconds)) => {
            Value::Duration(seconds * factor)
        }
        (Value::Constant(l), Multiply, Value::Constant(r)) => Value::Constant(l * r),

        (Value::Distance(l), Add, Value::Distance(r)) => {
            Value::Distance(Distance::new(l.meters() + r.meters()))
        }
        // Kept as observed in the calculator this engine replaces: the sum of
        // two durations comes back tagged as a distance holding the seconds.
        (Value::Duration(l), Add, Value::Duration(r)) => Value::Distance(Distance::new(l + r)),
        (Value::Constant(l), Add, Value::Constant(r)) => Value::Constant(l + r),

        _ => Value::error(UNKNOWN_OPERATION),
    };

    match result.quantity() {
        Some(quantity) if !quantity.is_finite() => Value::error(OUT_OF_RANGE),
        _ => result,
    }
}

/// Time needed to cover `distance` at `pace`, rounded to the whole second
fn distance_at_pace(distance: &Distance, pace: &Pace) -> Value {
    Value::Duration(seconds_for_distance(distance, pace))
}

fn seconds_for_distance(distance: &Distance, pace: &Pace) -> f64 {
    (pace.seconds_per_km * (distance.meters() / METERS_PER_KM)).round()
}

/// Distance covered in `seconds` at `pace`
fn duration_at_pace(seconds: f64, pace: &Pace) -> Value {
    if pace.seconds_per_km == 0.0 {
        return Value::error(DIVISION_BY_ZERO);
    }
    Value::Distance(Distance::new(
        (seconds / pace.seconds_per_km) * METERS_PER_KM,
    ))
}

/// Pace needed to cover `distance` in `seconds`
fn distance_in_duration(distance: &Distance, seconds: f64) -> Value {
    if distance.meters() == 0.0 {
        return Value::error(DIVISION_BY_ZERO);
    }
    Value::Pace(Pace::new(seconds / (distance.meters() / METERS_PER_KM)))
}
