//! Value kinds
//!
//! Every token the tokenizer emits, and every result the evaluator produces,
//! is a [`Value`]. Each kind stores exactly one quantity in a fixed unit:
//! meters for distances, seconds for durations and seconds per kilometer for
//! paces and speeds.

use crate::units::{HALF_MARATHON_METERS, MARATHON_METERS};
use crate::PaceError;
use serde::{Deserialize, Serialize};

/// A typed running quantity, operator or error
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unmatched input or a failed evaluation
    Error(String),
    Pace(Pace),
    Operator(Operator),
    /// Elapsed time in seconds
    Duration(f64),
    Distance(Distance),
    /// Dimensionless multiplier or addend
    Constant(f64),
}

/// Which way a pace is shown: time per distance, or distance per hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaceView {
    Pace,
    Speed,
}

/// Seconds needed to cover one kilometer.
///
/// A speed is the same quantity shown as distance per hour, so both share
/// this representation and differ only in `view`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    pub seconds_per_km: f64,
    pub view: PaceView,
}

impl Pace {
    pub fn new(seconds_per_km: f64) -> Self {
        Self {
            seconds_per_km,
            view: PaceView::Pace,
        }
    }

    pub fn speed(seconds_per_km: f64) -> Self {
        Self {
            seconds_per_km,
            view: PaceView::Speed,
        }
    }

    pub fn is_speed(&self) -> bool {
        self.view == PaceView::Speed
    }

    /// Same quantity, opposite view
    pub fn reciprocal(&self) -> Self {
        let view = match self.view {
            PaceView::Pace => PaceView::Speed,
            PaceView::Speed => PaceView::Pace,
        };
        Self {
            seconds_per_km: self.seconds_per_km,
            view,
        }
    }
}

/// Canonical race names a distance can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceName {
    Plain,
    Marathon,
    HalfMarathon,
}

/// A length in meters.
///
/// Named distances have a fixed magnitude, so the fields are private and
/// only the constructors below can produce one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    meters: f64,
    name: DistanceName,
}

impl Distance {
    pub fn new(meters: f64) -> Self {
        Self {
            meters,
            name: DistanceName::Plain,
        }
    }

    pub fn marathon() -> Self {
        Self {
            meters: MARATHON_METERS,
            name: DistanceName::Marathon,
        }
    }

    pub fn half_marathon() -> Self {
        Self {
            meters: HALF_MARATHON_METERS,
            name: DistanceName::HalfMarathon,
        }
    }

    pub fn meters(&self) -> f64 {
        self.meters
    }

    pub fn name(&self) -> DistanceName {
        self.name
    }
}

/// Operators the tokenizer recognises.
///
/// `@` and `-` are accepted as tokens but no operand rule uses them, so they
/// always evaluate to "Unknown operation".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    In,
    For,
    At,
    Multiply,
    Add,
    AtSign,
    Subtract,
}

impl Operator {
    /// Tokenizer try-order. Longer words never share a prefix with shorter
    /// ones here, so first match is enough.
    pub const ALL: [Operator; 7] = [
        Operator::Multiply,
        Operator::AtSign,
        Operator::At,
        Operator::For,
        Operator::In,
        Operator::Add,
        Operator::Subtract,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::In => "in",
            Operator::For => "for",
            Operator::At => "at",
            Operator::Multiply => "*",
            Operator::Add => "+",
            Operator::AtSign => "@",
            Operator::Subtract => "-",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// `for`, `at` and `in` relate two quantities and bind first
    pub fn is_relational(&self) -> bool {
        matches!(self, Operator::For | Operator::At | Operator::In)
    }

    pub fn is_multiplication(&self) -> bool {
        *self == Operator::Multiply
    }
}

/// Stable numeric tag of each value kind, as persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Kind {
    Error = 0,
    Pace = 1,
    Speed = 2,
    Operator = 3,
    Duration = 4,
    Distance = 5,
    Marathon = 6,
    HalfMarathon = 7,
    Constant = 8,
}

impl TryFrom<u8> for Kind {
    type Error = PaceError;

    fn try_from(tag: u8) -> Result<Self, PaceError> {
        let kind = match tag {
            0 => Kind::Error,
            1 => Kind::Pace,
            2 => Kind::Speed,
            3 => Kind::Operator,
            4 => Kind::Duration,
            5 => Kind::Distance,
            6 => Kind::Marathon,
            7 => Kind::HalfMarathon,
            8 => Kind::Constant,
            _ => return Err(PaceError::UnknownKind(tag)),
        };
        Ok(kind)
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> u8 {
        kind as u8
    }
}

impl Value {
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Error(_) => Kind::Error,
            Value::Pace(pace) => match pace.view {
                PaceView::Pace => Kind::Pace,
                PaceView::Speed => Kind::Speed,
            },
            Value::Operator(_) => Kind::Operator,
            Value::Duration(_) => Kind::Duration,
            Value::Distance(distance) => match distance.name {
                DistanceName::Plain => Kind::Distance,
                DistanceName::Marathon => Kind::Marathon,
                DistanceName::HalfMarathon => Kind::HalfMarathon,
            },
            Value::Constant(_) => Kind::Constant,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// True for both paces and speeds
    pub fn is_pace(&self) -> bool {
        matches!(self, Value::Pace(_))
    }

    /// True for plain and named distances
    pub fn is_distance(&self) -> bool {
        matches!(self, Value::Distance(_))
    }

    pub fn is_duration(&self) -> bool {
        matches!(self, Value::Duration(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Value::Operator(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Value::Constant(_))
    }

    /// The stored numeric quantity in its internal unit, if the kind has one
    pub fn quantity(&self) -> Option<f64> {
        match self {
            Value::Pace(pace) => Some(pace.seconds_per_km),
            Value::Duration(seconds) => Some(*seconds),
            Value::Distance(distance) => Some(distance.meters),
            Value::Constant(value) => Some(*value),
            Value::Error(_) | Value::Operator(_) => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Value::Operator(op) => Some(*op),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Value::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_round_trip() {
        for tag in 0u8..=8 {
            let kind = Kind::try_from(tag).unwrap();
            assert_eq!(u8::from(kind), tag);
        }
        assert!(matches!(Kind::try_from(9), Err(PaceError::UnknownKind(9))));
    }

    #[test]
    fn test_named_distances_keep_kind() {
        assert_eq!(Value::Distance(Distance::marathon()).kind(), Kind::Marathon);
        assert_eq!(
            Value::Distance(Distance::half_marathon()).kind(),
            Kind::HalfMarathon
        );
        assert_eq!(Value::Distance(Distance::new(10.0)).kind(), Kind::Distance);
        assert!(Value::Distance(Distance::marathon()).is_distance());
    }

    #[test]
    fn test_reciprocal_swaps_view_only() {
        let pace = Pace::new(240.0);
        let speed = pace.reciprocal();
        assert!(speed.is_speed());
        assert_eq!(speed.seconds_per_km, 240.0);
        assert_eq!(speed.reciprocal(), pace);
    }

    #[test]
    fn test_kind_predicates() {
        let values = [
            Value::error("x"),
            Value::Pace(Pace::new(240.0)),
            Value::Pace(Pace::speed(240.0)),
            Value::Operator(Operator::For),
            Value::Duration(60.0),
            Value::Distance(Distance::half_marathon()),
            Value::Constant(2.0),
        ];
        let flags: Vec<_> = values
            .iter()
            .map(|v| {
                (
                    v.is_error(),
                    v.is_pace(),
                    v.is_operator(),
                    v.is_duration(),
                    v.is_distance(),
                    v.is_constant(),
                )
            })
            .collect();

        assert_eq!(
            flags,
            vec![
                (true, false, false, false, false, false),
                (false, true, false, false, false, false),
                (false, true, false, false, false, false),
                (false, false, true, false, false, false),
                (false, false, false, true, false, false),
                (false, false, false, false, true, false),
                (false, false, false, false, false, true),
            ]
        );
    }

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("x"), None);
        assert!(Operator::In.is_relational());
        assert!(!Operator::Multiply.is_relational());
        assert!(Operator::Multiply.is_multiplication());
    }
}
