//! Typed maps decoded from JSON and their place in the crate error.

use jmap::value::{TypedMap, Value, ValueKind};

#[test]
fn test_typed_map_from_json() {
    let ports = TypedMap::from_json(ValueKind::I64, r#"{"http": 80, "https": 443}"#).unwrap();
    assert_eq!(ports.kind(), ValueKind::I64);
    assert_eq!(ports.get("https"), Some(&Value::I64(443)));

    let names = TypedMap::from_json(ValueKind::Text, r#"{"a": "x"}"#).unwrap();
    assert_eq!(names.get("a"), Some(&Value::from("x")));
}

#[test]
fn test_typed_map_from_json_kind_mismatch() {
    let err = TypedMap::from_json(ValueKind::I64, r#"{"http": 80, "name": "web"}"#).unwrap_err();

    assert!(err.is_kind_mismatch());
    assert_eq!(err.module(), "value");
    assert!(err.to_string().contains("at key 'name'"));
}

#[test]
fn test_typed_map_from_json_rejects_non_objects() {
    let err = TypedMap::from_json(ValueKind::I64, "[80]").unwrap_err();
    assert!(err.is_serialization_error());
    assert!(!err.is_kind_mismatch());
}
