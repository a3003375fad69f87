//! Rendering values as display strings
//!
//! Rendering is a pure function of the value and the active [`UnitSystem`].
//! Stored quantities are metric; conversion to miles, yards or per-mile
//! paces happens only here.

use crate::units::{
    Unit, UnitSystem, KM_PER_MILE, METERS_PER_KM, MILE_METERS, MILE_PER_KM, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE, YARD_METERS,
};
use crate::value::{Distance, DistanceName, Pace, PaceView, Value};
use serde::Serialize;

const MAX_FRACTION_DIGITS: usize = 3;

/// One number-and-unit piece of a rendered value (e.g. `34` + `min`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPart {
    pub value: String,
    pub unit: String,
}

impl RenderPart {
    fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

impl Value {
    /// Canonical display string, e.g. `4:00min/km` or `1h 34min 40s`
    pub fn render(&self, units: UnitSystem) -> String {
        self.render_parts(units)
            .iter()
            .map(|part| format!("{}{}", part.value, part.unit))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The display string split into number and unit pieces.
    ///
    /// Durations yield one piece per non-zero component; every other kind
    /// yields exactly one piece.
    pub fn render_parts(&self, units: UnitSystem) -> Vec<RenderPart> {
        match self {
            Value::Error(message) => vec![RenderPart::new(message.as_str(), "")],
            Value::Operator(op) => vec![RenderPart::new(op.symbol(), "")],
            Value::Constant(value) => vec![RenderPart::new(format_number(*value), "")],
            Value::Duration(seconds) => duration_parts(*seconds),
            Value::Distance(distance) => vec![distance_part(distance, units)],
            Value::Pace(pace) => vec![pace_part(pace, units)],
        }
    }
}

fn distance_part(distance: &Distance, units: UnitSystem) -> RenderPart {
    match distance.name() {
        DistanceName::Marathon => return RenderPart::new("M", ""),
        DistanceName::HalfMarathon => return RenderPart::new("HM", ""),
        DistanceName::Plain => {}
    }

    let meters = distance.meters();
    match units {
        UnitSystem::Imperial if meters < MILE_METERS => RenderPart::new(
            format_number((meters / YARD_METERS).round()),
            Unit::Yards.symbol(),
        ),
        UnitSystem::Imperial => {
            RenderPart::new(format_number(meters / MILE_METERS), Unit::Miles.symbol())
        }
        UnitSystem::Metric if meters < METERS_PER_KM => {
            RenderPart::new(format_number(meters), Unit::Meters.symbol())
        }
        UnitSystem::Metric => RenderPart::new(
            format_number(meters / METERS_PER_KM),
            Unit::Kilometers.symbol(),
        ),
    }
}

fn duration_parts(seconds: f64) -> Vec<RenderPart> {
    if !seconds.is_finite() {
        return vec![RenderPart::new(format_number(seconds), Unit::Seconds.symbol())];
    }

    let total = seconds.round();
    let hours = (total / SECONDS_PER_HOUR).floor();
    let minutes = ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE).floor();
    let secs = total % SECONDS_PER_MINUTE;

    let mut parts = Vec::new();
    for (amount, unit) in [
        (hours, Unit::Hours),
        (minutes, Unit::Minutes),
        (secs, Unit::Seconds),
    ] {
        if amount > 0.0 {
            parts.push(RenderPart::new(format!("{}", amount as i64), unit.symbol()));
        }
    }

    if parts.is_empty() {
        parts.push(RenderPart::new("0", Unit::Seconds.symbol()));
    }
    parts
}

fn pace_part(pace: &Pace, units: UnitSystem) -> RenderPart {
    match pace.view {
        PaceView::Pace => {
            let per_unit = match units {
                UnitSystem::Metric => pace.seconds_per_km,
                UnitSystem::Imperial => pace.seconds_per_km * KM_PER_MILE,
            };
            RenderPart::new(minutes_seconds(per_unit), units.pace_unit().symbol())
        }
        PaceView::Speed => {
            let km_per_hour = SECONDS_PER_MINUTE / (pace.seconds_per_km / SECONDS_PER_MINUTE);
            let per_hour = match units {
                UnitSystem::Metric => km_per_hour,
                UnitSystem::Imperial => km_per_hour * MILE_PER_KM,
            };
            RenderPart::new(format_number(per_hour), units.speed_unit().symbol())
        }
    }
}

/// `m:ss`, rounded to the whole second before splitting
fn minutes_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return format_number(seconds);
    }
    let total = seconds.round() as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a number the way en-US locales do: grouped thousands and at most
/// three fraction digits, with trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // Ties round away from zero, as en-US does
    let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    let scaled = value * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, rounded);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = grouped == "0" && fraction.is_empty();
    let sign = if is_zero { "" } else { sign };

    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}
