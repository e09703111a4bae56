use serde_json::json;

use crate::Value;

fn sample() -> Value {
    Value::Object(vec![
        ("zeta".into(), Value::Integer(1)),
        ("alpha".into(), Value::Bool(true)),
        (
            "items".into(),
            Value::List(vec![Value::Number(1.5), Value::Null, Value::Text("x".into())]),
        ),
        ("raw".into(), Value::Raw(json!({"k": "v"}))),
    ])
}

#[test]
fn serialize_keeps_field_order() {
    assert_eq!(
        sample().to_json(false).unwrap(),
        r#"{"zeta":1,"alpha":true,"items":[1.5,null,"x"],"raw":{"k":"v"}}"#
    );
}

#[test]
fn accessors() {
    let value = sample();
    assert_eq!(value.get("zeta"), Some(&Value::Integer(1)));
    assert!(value.get("missing").is_none());
    assert_eq!(value.get("items").and_then(Value::as_list).map(<[_]>::len), Some(3));
    assert_eq!(
        value.get("items").and_then(Value::as_list).unwrap()[2].as_str(),
        Some("x")
    );
    assert!(Value::Null.is_null());
    assert!(Value::Text("x".into()).get("x").is_none());
}
