//! Unit tables and conversions
//!
//! Handles the fixed vocabulary of running units:
//! - Pace and speed (min/km, min/mi, km/h, mi/h)
//! - Distance (meters, kilometers, miles, yards)
//! - Duration (seconds, minutes, hours)

use crate::PaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meters in one statute mile
pub const MILE_METERS: f64 = 1609.34;

/// Meters in one yard
pub const YARD_METERS: f64 = 0.9144;

/// Kilometers in one mile
pub const KM_PER_MILE: f64 = 1.60934;

/// Miles in one kilometer
pub const MILE_PER_KM: f64 = 1.0 / KM_PER_MILE;

pub const METERS_PER_KM: f64 = 1000.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Canonical marathon distance
pub const MARATHON_METERS: f64 = 42195.0;

/// Canonical half-marathon distance
pub const HALF_MARATHON_METERS: f64 = MARATHON_METERS / 2.0;

/// Every unit symbol the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    MinutesPerKilometer,
    MinutesPerMile,
    KilometersPerHour,
    MilesPerHour,

    Meters,
    Kilometers,
    Miles,
    Yards,

    Seconds,
    Minutes,
    Hours,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::MinutesPerKilometer => "min/km",
            Unit::MinutesPerMile => "min/mi",
            Unit::KilometersPerHour => "km/h",
            Unit::MilesPerHour => "mi/h",
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Miles => "mi",
            Unit::Yards => "yd",
            Unit::Seconds => "s",
            Unit::Minutes => "min",
            Unit::Hours => "h",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Display system for distances, paces and speeds.
///
/// Only affects unlabelled paces while tokenizing and how values render;
/// stored quantities are always metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// The per-distance minute unit an unlabelled `m:ss` pace is read in
    pub fn pace_unit(&self) -> Unit {
        match self {
            UnitSystem::Metric => Unit::MinutesPerKilometer,
            UnitSystem::Imperial => Unit::MinutesPerMile,
        }
    }

    pub fn speed_unit(&self) -> Unit {
        match self {
            UnitSystem::Metric => Unit::KilometersPerHour,
            UnitSystem::Imperial => Unit::MilesPerHour,
        }
    }

    pub fn distance_unit(&self) -> Unit {
        match self {
            UnitSystem::Metric => Unit::Kilometers,
            UnitSystem::Imperial => Unit::Miles,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitSystem {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "km" => Ok(UnitSystem::Metric),
            "imperial" | "mi" => Ok(UnitSystem::Imperial),
            _ => Err(PaceError::UnknownUnitSystem(s.to_string())),
        }
    }
}

/// Convert a distance in `unit` to meters. `None` for non-distance units.
pub fn to_meters(value: f64, unit: Unit) -> Option<f64> {
    match unit {
        Unit::Meters => Some(value),
        Unit::Kilometers => Some(value * METERS_PER_KM),
        Unit::Miles => Some(value * MILE_METERS),
        Unit::Yards => Some(value * YARD_METERS),
        _ => None,
    }
}

/// Convert a colon-delimited duration to seconds.
///
/// The unit names the leading component: `s` reads only the first number,
/// `min` reads `minutes:seconds`, `h` reads `hours:minutes:seconds`.
pub fn to_seconds(first: f64, second: f64, third: f64, unit: Unit) -> Option<f64> {
    match unit {
        Unit::Seconds => Some(first),
        Unit::Minutes => Some(first * SECONDS_PER_MINUTE + second),
        Unit::Hours => Some(first * SECONDS_PER_HOUR + second * SECONDS_PER_MINUTE + third),
        _ => None,
    }
}
