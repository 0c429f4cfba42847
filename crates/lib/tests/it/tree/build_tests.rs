//! Building canonical trees from map-like values.

use jmap::{
    mapper::{Entries, KeyedMapper, MapPredicate, Mapper, MapperError, PlainMapper},
    tree::{Node, Tree, TreeError, build},
    value::Value,
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_build_tags_internal_nodes() {
    let source = value(json!({"a": 1, "c": {"x": 3, "y": {"z": true}}}));
    let tree = build(&source, 0, &PlainMapper).unwrap();

    assert_eq!(sorted_keys(&tree), ["a", "c"]);
    assert_eq!(tree.get("a"), Some(&Node::Leaf(Value::I64(1))));

    let c = tree.get("c").and_then(Node::as_tree).unwrap();
    assert_eq!(sorted_keys(c), ["x", "y"]);
    assert!(c.get("y").unwrap().is_internal());
}

#[test]
fn test_build_rejects_non_map() {
    let err = build(&Value::from("leaf"), 0, &PlainMapper).unwrap_err();
    assert!(err.is_not_a_map());
    assert!(err.partial().is_none());
}

#[test]
fn test_build_empty_map() {
    let tree = build(&value(json!({})), 0, &PlainMapper).unwrap();
    assert!(tree.is_empty());
}

#[test]
fn test_build_depth_keeps_deeper_maps_as_leaves() {
    let source = value(json!({"a": {"b": {"c": 1}}}));

    let tree = build(&source, 1, &PlainMapper).unwrap();
    assert_eq!(tree.get("a"), Some(&Node::Leaf(value(json!({"b": {"c": 1}})))));

    let tree = build(&source, 2, &PlainMapper).unwrap();
    let b = tree.get_path(&["a", "b"]).unwrap();
    assert_eq!(b, &Node::Leaf(value(json!({"c": 1}))));

    let tree = build(&source, 3, &PlainMapper).unwrap();
    assert!(tree.get_path(&["a", "b"]).unwrap().is_internal());
}

#[test]
fn test_build_with_keyed_mapper() {
    let mut root = map(json!({}));
    root.insert("ports".to_string(), Value::from(int_typed_map(&[("http", 80)])));
    let source = Value::Map(root);

    let narrow = build(&source, 0, &PlainMapper).unwrap();
    assert!(!narrow.get("ports").unwrap().is_internal());

    let broad = build(&source, 0, &KeyedMapper).unwrap();
    let http = broad.get_path(&["ports", "http"]).and_then(Node::as_leaf);
    assert_eq!(http, Some(&Value::I64(80)));
}

#[test]
fn test_tree_converts_back_to_nested_value() {
    let source = value(json!({"a": {"b": [1, 2]}, "c": null}));
    let tree = build(&source, 0, &PlainMapper).unwrap();
    assert_eq!(Value::Map(tree.into_map()), source);
}

/// Fails on any map containing the key "stop".
struct StopMapper;

impl MapPredicate for StopMapper {
    fn is_map(&self, value: &Value) -> bool {
        PlainMapper.is_map(value)
    }
}

impl Mapper for StopMapper {
    fn unpack<'a>(&self, value: &'a Value) -> Result<Entries<'a>, MapperError> {
        if value.as_map().is_some_and(|m| m.contains_key("stop")) {
            return Err(MapperError::UnpackFailed {
                mapper: "stop",
                reason: "stop key found".to_string(),
            });
        }
        PlainMapper.unpack(value)
    }
}

#[test]
fn test_build_failure_returns_partial_tree() {
    let source = value(json!({
        "outer": {"broken": {"stop": 1}}
    }));

    let err = build(&source, 0, &StopMapper).unwrap_err();
    assert_eq!(err.path(), Some("outer.broken"));
    assert!(err.to_string().contains("stop key found"));

    let partial: Tree = err.into_partial().unwrap();
    // The failing child is attached to its parent, empty
    let broken = partial.get_path(&["outer", "broken"]).and_then(Node::as_tree);
    assert_eq!(broken, Some(&Tree::new()));
}

#[test]
fn test_build_failure_at_root_has_empty_partial() {
    let err = build(&value(json!({"stop": 1})), 0, &StopMapper).unwrap_err();
    assert!(matches!(err, TreeError::Incomplete { .. }));
    assert_eq!(err.path(), Some(""));
    assert!(err.partial().unwrap().is_empty());
}

#[test]
fn test_build_error_converts_to_crate_error() {
    let err: jmap::Error = build(&Value::Null, 0, &PlainMapper).unwrap_err().into();
    assert_eq!(err.module(), "tree");
    assert!(err.is_not_a_map());
}
