use crate::serializers::{from_json, to_json};
use crate::{
    tokenize, Calculation, Distance, Kind, Pace, PaceError, PlainValue, UnitSystem, Value,
};

fn round_trip(value: &Value) -> Value {
    Value::from_plain(&value.to_plain())
}

#[test]
fn test_values_round_trip_through_plain_data() {
    let calculation = tokenize("4:00 for 2min + 15km/h for 5min * 2", UnitSystem::Metric);
    for part in calculation.parts() {
        assert_eq!(&round_trip(part), part);
    }
    let result = calculation.result().unwrap();
    assert_eq!(&round_trip(result), result);
}

#[test]
fn test_named_distance_ignores_tampered_meters() {
    let mut plain = Value::Distance(Distance::marathon()).to_plain();
    plain.meters = Some(1.0);
    assert_eq!(Value::from_plain(&plain), Value::Distance(Distance::marathon()));

    let half = PlainValue {
        meters: None,
        ..Value::Distance(Distance::half_marathon()).to_plain()
    };
    assert_eq!(Value::from_plain(&half), Value::Distance(Distance::half_marathon()));
}

#[test]
fn test_missing_field_reconstructs_to_error() {
    let mut plain = Value::Duration(60.0).to_plain();
    plain.seconds = None;
    let value = Value::from_plain(&plain);
    assert!(value.is_error());
    assert!(value.error_message().unwrap().contains("Seconds"));
}

#[test]
fn test_unknown_operator_symbol() {
    let mut plain = Value::Operator(crate::Operator::For).to_plain();
    plain.operator = Some("/".to_string());
    assert_eq!(
        Value::from_plain(&plain),
        Value::error("Unknown operator '/'")
    );
}

#[test]
fn test_calculation_json_round_trip() {
    let calculation = tokenize("HM in 1:30h", UnitSystem::Metric);
    let json = to_json(&calculation).unwrap();
    let restored = from_json(&json).unwrap();
    assert_eq!(restored, calculation);
    assert_eq!(restored.parts()[0].kind(), Kind::HalfMarathon);
}

#[test]
fn test_stored_quantities_restore_bit_for_bit() {
    let json = r#"{"Parts":[{"Type":1,"SecondsPerKm":255.95449697831498},{"Type":3,"Operator":"for"},{"Type":4,"Seconds":0.30000000000000004}]}"#;
    let restored = from_json(json).unwrap();
    assert_eq!(
        restored.parts()[0],
        Value::Pace(Pace::new(255.95449697831498))
    );
    assert_eq!(restored.parts()[2], Value::Duration(0.1 + 0.2));
}

#[test]
fn test_failed_calculation_round_trips_without_result() {
    let calculation = tokenize("test", UnitSystem::Metric);
    let restored = from_json(&to_json(&calculation).unwrap()).unwrap();
    assert_eq!(restored, calculation);
    assert!(restored.is_error());
}

#[test]
fn test_from_json_rejects_unknown_kind() {
    let err = from_json(r#"{"Parts":[{"Type":42}]}"#).unwrap_err();
    assert!(matches!(err, PaceError::Json(_)));
    assert!(err.to_string().contains("42"));
}

#[test]
fn test_from_plain_keeps_stored_result() {
    // Stored results are restored, not recomputed
    let json = r#"{"Parts":[{"Type":8,"Value":1},{"Type":3,"Operator":"+"},{"Type":8,"Value":1}],"Result":{"Type":8,"Value":3}}"#;
    let restored: Calculation = from_json(json).unwrap();
    assert_eq!(restored.result(), Some(&Value::Constant(3.0)));
}
