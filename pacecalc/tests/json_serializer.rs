use pacecalc::serializers::{from_json, to_json};
use pacecalc::{tokenize, Distance, UnitSystem, Value};

#[test]
fn test_plain_json_shape() {
    let calculation = tokenize("4:00 for 4min", UnitSystem::Metric);
    let json = to_json(&calculation).unwrap();
    insta::assert_snapshot!(json, @r#"{"Parts":[{"Type":1,"SecondsPerKm":240.0},{"Type":3,"Operator":"for"},{"Type":4,"Seconds":240.0}],"Result":{"Type":5,"Meters":1000.0}}"#);
}

#[test]
fn test_named_distance_json() {
    let json = serde_json::to_string(&Value::Distance(Distance::marathon()).to_plain()).unwrap();
    insta::assert_snapshot!(json, @r#"{"Type":6,"Meters":42195.0}"#);
}

#[test]
fn test_error_json() {
    let calculation = tokenize("5km in soon", UnitSystem::Metric);
    let json = to_json(&calculation).unwrap();
    insta::assert_snapshot!(json, @r#"{"Parts":[{"Type":5,"Meters":5000.0},{"Type":3,"Operator":"in"},{"Type":0,"Message":"soon"}]}"#);
}

#[test]
fn test_reads_integer_fields_and_tampered_marathon() {
    let json = r#"{"Parts":[{"Type":6,"Meters":7},{"Type":3,"Operator":"in"},{"Type":4,"Seconds":10800}],"Result":{"Type":1,"SecondsPerKm":255.95449697831498}}"#;
    let calculation = from_json(json).unwrap();
    assert_eq!(calculation.parts()[0], Value::Distance(Distance::marathon()));
    assert_eq!(
        calculation.result().unwrap().render(UnitSystem::Metric),
        "4:16min/km"
    );
    assert_eq!(calculation.to_input(UnitSystem::Metric), "M in 3h");
}
