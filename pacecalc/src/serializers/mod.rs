//! Plain-data form of values and calculations
//!
//! Stored calculations use the PascalCase field names the web client reads,
//! so a stored record looks like
//! `{"Type":5,"Meters":1000}` or `{"Type":3,"Operator":"for"}`.

mod json;

pub use json::{from_json, to_json};

use crate::value::{Distance, Kind, Operator, Pace, Value};
use crate::Calculation;
use serde::{Deserialize, Serialize};

/// One value as plain data. Only the field its kind uses is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlainValue {
    #[serde(rename = "Type")]
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_per_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PlainValue {
    fn empty(kind: Kind) -> Self {
        Self {
            kind,
            meters: None,
            seconds: None,
            seconds_per_km: None,
            value: None,
            operator: None,
            message: None,
        }
    }
}

/// A calculation as plain data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlainCalculation {
    pub parts: Vec<PlainValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<PlainValue>,
}

impl Value {
    pub fn to_plain(&self) -> PlainValue {
        let mut plain = PlainValue::empty(self.kind());
        match self {
            Value::Error(message) => plain.message = Some(message.clone()),
            Value::Pace(pace) => plain.seconds_per_km = Some(pace.seconds_per_km),
            Value::Operator(op) => plain.operator = Some(op.symbol().to_string()),
            Value::Duration(seconds) => plain.seconds = Some(*seconds),
            Value::Distance(distance) => plain.meters = Some(distance.meters()),
            Value::Constant(value) => plain.value = Some(*value),
        }
        plain
    }

    /// Rebuild a value from its plain form.
    ///
    /// Named distances always come back at their canonical length, whatever
    /// was stored. A missing field or an unknown operator symbol yields an
    /// error value describing the problem.
    pub fn from_plain(plain: &PlainValue) -> Value {
        match plain.kind {
            Kind::Pace => field(plain, plain.seconds_per_km, "SecondsPerKm", |s| {
                Value::Pace(Pace::new(s))
            }),
            Kind::Speed => field(plain, plain.seconds_per_km, "SecondsPerKm", |s| {
                Value::Pace(Pace::speed(s))
            }),
            Kind::Duration => field(plain, plain.seconds, "Seconds", Value::Duration),
            Kind::Distance => field(plain, plain.meters, "Meters", |m| {
                Value::Distance(Distance::new(m))
            }),
            Kind::Constant => field(plain, plain.value, "Value", Value::Constant),
            Kind::Marathon => Value::Distance(Distance::marathon()),
            Kind::HalfMarathon => Value::Distance(Distance::half_marathon()),
            Kind::Operator => match plain.operator.as_deref() {
                Some(symbol) => match Operator::from_symbol(symbol) {
                    Some(op) => Value::Operator(op),
                    None => Value::error(format!("Unknown operator '{}'", symbol)),
                },
                None => missing("Operator", plain.kind),
            },
            Kind::Error => Value::Error(plain.message.clone().unwrap_or_default()),
        }
    }
}

fn field(
    plain: &PlainValue,
    stored: Option<f64>,
    name: &str,
    build: impl FnOnce(f64) -> Value,
) -> Value {
    match stored {
        Some(quantity) => build(quantity),
        None => missing(name, plain.kind),
    }
}

fn missing(name: &str, kind: Kind) -> Value {
    Value::error(format!("Missing field '{}' for {:?}", name, kind))
}

impl Calculation {
    pub fn to_plain(&self) -> PlainCalculation {
        PlainCalculation {
            parts: self.parts().iter().map(Value::to_plain).collect(),
            result: self.result().map(Value::to_plain),
        }
    }

    /// Rebuild a stored calculation exactly as it was saved, without
    /// re-evaluating it
    pub fn from_plain(plain: &PlainCalculation) -> Self {
        Calculation::new(
            plain.parts.iter().map(Value::from_plain).collect(),
            plain.result.as_ref().map(Value::from_plain),
        )
    }
}
