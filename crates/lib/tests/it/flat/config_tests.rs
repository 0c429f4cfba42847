//! Configuration handling: prefixes, separators, JSON-loaded configs.

use jmap::{
    flat::{Config, FlatRef, flatten_with, to_owned_flat, unflatten_with},
    value::Value,
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_flatten_with_prefix_roots_keys() {
    let tree = value(json!({"db": {"host": "localhost", "port": 5432}}));
    let config = Config::new().with_prefix("app");

    let mut flat = FlatRef::new();
    flatten_with(&tree, &config, &mut flat).unwrap();

    assert_eq!(sorted_keys(&flat), ["app.db.host", "app.db.port"]);
}

#[test]
fn test_prefix_round_trip() {
    let tree = value(json!({"db": {"host": "localhost", "port": 5432}, "debug": false}));
    let config = Config::new().with_prefix(" app ").with_separator("_");

    let mut flat = FlatRef::new();
    flatten_with(&tree, &config, &mut flat).unwrap();
    assert_eq!(sorted_keys(&flat), ["app_db_host", "app_db_port", "app_debug"]);

    let rebuilt = unflatten_with(to_owned_flat(&flat), &config).unwrap();
    assert_eq!(Value::Map(rebuilt), tree);
}

#[test]
fn test_unflatten_prefix_filters_keys() {
    let flat = flat_map(&[
        ("app.db.host", json!("localhost")),
        ("app.debug", json!(true)),
        ("other.key", json!(1)),
        ("app", json!("prefix only")),
    ]);

    let tree = unflatten_with(flat, &Config::new().with_prefix("app")).unwrap();
    assert_eq!(tree, map(json!({"db": {"host": "localhost"}, "debug": true})));
}

#[test]
fn test_unflatten_prefix_including_separator() {
    let flat = flat_map(&[("env.a", json!(1)), ("env.b.c", json!(2))]);
    let tree = unflatten_with(flat, &Config::new().with_prefix("env.")).unwrap();
    assert_eq!(tree, map(json!({"a": 1, "b": {"c": 2}})));
}

#[test]
fn test_unflatten_prefix_collision_ordered_by_stripped_path() {
    // "cfga" sorts after "cfg.a.b" but strips to "a", which must land first
    for _ in 0..16 {
        let flat = flat_map(&[("cfg.a.b", json!(1)), ("cfga", json!(2))]);
        let err = unflatten_with(flat, &Config::new().with_prefix("cfg")).unwrap_err();

        assert!(err.is_collision());
        assert_eq!(err.path(), Some("a.b"));
        assert_eq!(err.key(), Some("a"));
    }
}

#[test]
fn test_unflatten_prefix_keys_sharing_a_path_resolve_by_key() {
    // Both strip to "a"; the later full key wins
    let flat = flat_map(&[("cfg.a", json!(1)), ("cfga", json!(2))]);
    let tree = unflatten_with(flat, &Config::new().with_prefix("cfg")).unwrap();
    assert_eq!(tree, map(json!({"a": 2})));
}

#[test]
fn test_config_from_json_drives_flatten() {
    let config = Config::from_json(r#"{"separator": "/", "max_depth": 1}"#).unwrap();
    let tree = value(json!({"a": {"b": {"c": 1}}}));

    let mut flat = FlatRef::new();
    flatten_with(&tree, &config, &mut flat).unwrap();

    assert_eq!(sorted_keys(&flat), ["a"]);
}

#[test]
fn test_config_from_json_negative_depth_uses_ceiling() {
    for json in [r#"{"max_depth": -1}"#, r#"{"max_depth": 0}"#] {
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.max_depth(), jmap::constants::MAX_DEPTH, "{json}");
    }

    // 20 levels deep; the ceiling keeps the last levels as one leaf
    let mut tree = json!({"leaf": 1});
    for level in (0..19).rev() {
        let mut object = serde_json::Map::new();
        object.insert(format!("l{level}"), tree);
        tree = serde_json::Value::Object(object);
    }
    let tree = value(tree);
    let mut flat = FlatRef::new();
    let config = Config::from_json(r#"{"max_depth": -7}"#).unwrap();
    flatten_with(&tree, &config, &mut flat).unwrap();

    let keys = sorted_keys(&flat);
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].split('.').count(), 15);
}

#[test]
fn test_config_from_json_rejects_bad_input() {
    let err = Config::from_json(r#"{"separator": 3}"#).unwrap_err();
    assert!(err.is_serialization_error());
    assert_eq!(err.module(), "serialize");
}
