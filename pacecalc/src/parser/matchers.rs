//! Token matchers
//!
//! One function per value kind. Each looks at the start of the remaining
//! input and either returns the value it read together with the unconsumed
//! tail, or `None` so the next matcher can try.

use super::scan::{colon_integer, integer, keyword, number, unit};
use crate::units::{
    to_meters, to_seconds, Unit, UnitSystem, KM_PER_MILE, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::value::{Distance, Operator, Pace, Value};

pub type Match<'a> = Option<(Value, &'a str)>;
pub type Matcher = for<'a> fn(&'a str, UnitSystem) -> Match<'a>;

/// Matchers in try-order. Several of them accept the same prefix (`4` can
/// start a pace, a duration, a distance or a constant), so the first match
/// wins and the order is part of the grammar.
pub const MATCHERS: [(&str, Matcher); 8] = [
    ("pace", pace),
    ("speed", speed),
    ("duration", duration),
    ("operator", operator),
    ("distance", distance),
    ("marathon", marathon),
    ("half marathon", half_marathon),
    ("constant", constant),
];

const PACE_UNITS: [Unit; 5] = [
    Unit::MinutesPerKilometer,
    Unit::MinutesPerMile,
    Unit::Hours,
    Unit::Minutes,
    Unit::Seconds,
];
const SPEED_UNITS: [Unit; 2] = [Unit::KilometersPerHour, Unit::MilesPerHour];
const DURATION_UNITS: [Unit; 3] = [Unit::Hours, Unit::Minutes, Unit::Seconds];
const DISTANCE_UNITS: [Unit; 4] = [Unit::Miles, Unit::Meters, Unit::Kilometers, Unit::Yards];

/// `m[:ss][min/km|min/mi]`.
///
/// A bare number without colon or unit is not a pace. A duration unit
/// (`h`, `min`, `s`) is read and then rejected so `4:00min` and `4min`
/// fall through to the duration matcher.
pub fn pace(input: &str, units: UnitSystem) -> Match<'_> {
    let (minutes, rest) = integer(input)?;
    let (seconds, rest) = match colon_integer(rest) {
        Some((seconds, rest)) => (Some(seconds), rest),
        None => (None, rest),
    };
    let (explicit, rest) = match unit(rest, &PACE_UNITS) {
        Some((unit, rest)) => (Some(unit), rest),
        None => (None, rest),
    };

    if seconds.is_none() && explicit.is_none() {
        return None;
    }

    let seconds_per_unit = minutes * SECONDS_PER_MINUTE + seconds.unwrap_or(0.0);
    let seconds_per_km = match explicit.unwrap_or_else(|| units.pace_unit()) {
        Unit::MinutesPerKilometer => seconds_per_unit,
        Unit::MinutesPerMile => seconds_per_unit / KM_PER_MILE,
        _ => return None,
    };

    Some((Value::Pace(Pace::new(seconds_per_km)), rest))
}

/// `number(km/h|mi/h)`, stored as seconds per kilometer
pub fn speed(input: &str, _units: UnitSystem) -> Match<'_> {
    let (value, rest) = number(input)?;
    let (unit, rest) = unit(rest, &SPEED_UNITS)?;

    let seconds_per_unit = (SECONDS_PER_MINUTE / value) * SECONDS_PER_MINUTE;
    let seconds_per_km = match unit {
        Unit::MilesPerHour => seconds_per_unit / KM_PER_MILE,
        _ => seconds_per_unit,
    };

    Some((Value::Pace(Pace::speed(seconds_per_km)), rest))
}

/// `[Nh][Nmin][Ns]` with at least one component, else `N[:N][:N](h|min|s)`
pub fn duration(input: &str, _units: UnitSystem) -> Match<'_> {
    composite_duration(input).or_else(|| colon_duration(input))
}

fn composite_duration(input: &str) -> Match<'_> {
    let mut rest = input;
    let mut total = 0.0;
    let mut matched = false;

    for component in DURATION_UNITS {
        let read = integer(rest)
            .and_then(|(amount, tail)| tail.strip_prefix(component.symbol()).map(|t| (amount, t)));
        if let Some((amount, tail)) = read {
            total += amount * seconds_in(component);
            rest = tail;
            matched = true;
        }
    }

    matched.then(|| (Value::Duration(total), rest))
}

fn colon_duration(input: &str) -> Match<'_> {
    let (first, rest) = integer(input)?;
    let (second, rest) = colon_integer(rest).unwrap_or((0.0, rest));
    let (third, rest) = colon_integer(rest).unwrap_or((0.0, rest));
    let (unit, rest) = unit(rest, &DURATION_UNITS)?;

    let seconds = to_seconds(first, second, third, unit)?;
    Some((Value::Duration(seconds), rest))
}

fn seconds_in(unit: Unit) -> f64 {
    match unit {
        Unit::Hours => SECONDS_PER_HOUR,
        Unit::Minutes => SECONDS_PER_MINUTE,
        _ => 1.0,
    }
}

pub fn operator(input: &str, _units: UnitSystem) -> Match<'_> {
    Operator::ALL.into_iter().find_map(|op| {
        input
            .strip_prefix(op.symbol())
            .map(|rest| (Value::Operator(op), rest))
    })
}

/// `number(mi|m|km|yd)`
pub fn distance(input: &str, _units: UnitSystem) -> Match<'_> {
    let (value, rest) = number(input)?;
    let (unit, rest) = unit(rest, &DISTANCE_UNITS)?;
    let meters = to_meters(value, unit)?;
    Some((Value::Distance(Distance::new(meters)), rest))
}

pub fn marathon(input: &str, _units: UnitSystem) -> Match<'_> {
    let rest = keyword(input, "m")?;
    Some((Value::Distance(Distance::marathon()), rest))
}

pub fn half_marathon(input: &str, _units: UnitSystem) -> Match<'_> {
    let rest = keyword(input, "hm")?;
    Some((Value::Distance(Distance::half_marathon()), rest))
}

/// A bare number, accepted only at the end of input or right before an
/// operator. Anywhere else it was meant to carry a unit that failed to
/// parse, and the remainder should surface as an error instead.
pub fn constant(input: &str, units: UnitSystem) -> Match<'_> {
    let (value, rest) = number(input)?;
    if rest.is_empty() || operator(rest, units).is_some() {
        Some((Value::Constant(value), rest))
    } else {
        None
    }
}
