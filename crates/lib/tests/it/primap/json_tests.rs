//! JSON encoding and decoding of primitive maps.

use jmap::{primap::PriMap, value::Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_to_json_is_a_flat_object() {
    let primap = PriMap::new(map(json!({"a": 1, "b": "two", "c": 1.5, "d": true})));
    let encoded = primap.to_json().unwrap();

    let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, json!({"a": 1, "b": "two", "c": 1.5, "d": true}));
    assert!(!encoded.contains('\n'));
}

#[test]
fn test_to_json_pretty_uses_indent() {
    let primap = PriMap::new(map(json!({"a": 1})));
    assert_eq!(primap.to_json_pretty("    ", "").unwrap(), "{\n    \"a\": 1\n}");
    assert_eq!(primap.to_json_pretty("\t", "").unwrap(), "{\n\t\"a\": 1\n}");
}

#[test]
fn test_to_json_pretty_prefixes_continuation_lines() {
    let primap = PriMap::new(map(json!({"a": "line\nbreak"})));
    assert_eq!(
        primap.to_json_pretty("  ", "//").unwrap(),
        "{\n//  \"a\": \"line\\nbreak\"\n//}"
    );
    assert_eq!(PriMap::default().to_json_pretty("  ", "//").unwrap(), "{}");
}

#[test]
fn test_empty_map_encodes_as_empty_object() {
    assert_eq!(PriMap::default().to_json().unwrap(), "{}");
}

#[test]
fn test_replace_json_normalizes() {
    let mut primap = PriMap::default();
    primap.replace_json(r#"{"x": 1, "y": "s"}"#).unwrap();

    assert_eq!(primap.get("x"), Some(&Value::I64(1)));
    assert_eq!(primap.get("y"), Some(&Value::from("s")));
}

#[test]
fn test_replace_json_keeps_partial_results() {
    let mut primap = PriMap::default();
    let err = primap.replace_json(r#"{"x": 1, "y": [1, 2]}"#).unwrap_err();

    assert!(err.is_normalization_error());
    assert_eq!(err.to_string(), "Invalid values: y");
    assert_eq!(primap.len(), 2);
}

#[test]
fn test_replace_json_rejects_non_objects_without_touching_map() {
    let mut primap = PriMap::new(map(json!({"keep": 1})));

    for bad in ["[1, 2]", "not json", "3"] {
        let err = primap.replace_json(bad).unwrap_err();
        assert!(err.is_serialization_error(), "{bad}: {err}");
    }
    assert_eq!(primap.get("keep"), Some(&Value::I64(1)));
}

#[test]
fn test_deserialize_is_strict() {
    let primap: PriMap = serde_json::from_str(r#"{"a": 1, "b": false}"#).unwrap();
    assert_eq!(primap.get("b"), Some(&Value::Bool(false)));

    let err = serde_json::from_str::<PriMap>(r#"{"a": 1, "b": {"c": 2}}"#).unwrap_err();
    assert!(err.to_string().contains("Invalid values: b"));
}

#[test]
fn test_json_round_trip() {
    let original = PriMap::new(map(json!({"a": -3, "b": "x", "c": 0.5})));
    let decoded: PriMap = serde_json::from_str(&original.to_json().unwrap()).unwrap();
    assert_eq!(decoded, original);
}
