use jmap::{
    FlatMap,
    value::{Map, TypedMap, Value, ValueKind},
};

/// Converts a `json!` literal into a [`Value`].
pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Converts a `json!` object literal into a [`Map`].
///
/// # Panics
/// Panics if `json` is not an object.
pub fn map(json: serde_json::Value) -> Map {
    match Value::from(json) {
        Value::Map(map) => map,
        other => panic!("Expected a JSON object, got {other:?}"),
    }
}

/// Builds an owned flat map from `(key, json)` pairs.
pub fn flat_map(entries: &[(&str, serde_json::Value)]) -> FlatMap {
    entries
        .iter()
        .map(|(key, json)| (key.to_string(), Value::from(json.clone())))
        .collect()
}

/// Sorted keys of any string-keyed map, for order-independent assertions.
pub fn sorted_keys<'a, V: 'a>(entries: impl IntoIterator<Item = (&'a String, V)>) -> Vec<String> {
    let mut keys: Vec<String> = entries.into_iter().map(|(key, _)| key.clone()).collect();
    keys.sort();
    keys
}

/// A typed map of `i64` values.
pub fn int_typed_map(entries: &[(&str, i64)]) -> TypedMap {
    TypedMap::from_entries(ValueKind::I64, entries.iter().map(|(k, v)| (*k, *v)))
        .expect("i64 entries match an I64 typed map")
}
