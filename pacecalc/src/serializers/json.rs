use super::PlainCalculation;
use crate::{Calculation, PaceResult};

/// Serialize a calculation to its plain-data JSON form
pub fn to_json(calculation: &Calculation) -> PaceResult<String> {
    Ok(serde_json::to_string(&calculation.to_plain())?)
}

/// Restore a calculation from plain-data JSON.
///
/// Expected format:
/// ```json
/// {
///   "Parts": [
///     {"Type": 1, "SecondsPerKm": 240},
///     {"Type": 3, "Operator": "for"},
///     {"Type": 4, "Seconds": 240}
///   ],
///   "Result": {"Type": 5, "Meters": 1000}
/// }
/// ```
pub fn from_json(json: &str) -> PaceResult<Calculation> {
    let plain: PlainCalculation = serde_json::from_str(json)?;
    Ok(Calculation::from_plain(&plain))
}
