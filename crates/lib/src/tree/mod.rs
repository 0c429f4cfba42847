//! Canonical trees with explicit internal and leaf nodes.
//!
//! [`build`] turns any map recognized by a [`Mapper`] into a [`Tree`] whose
//! internal nodes are tagged as [`Node::Internal`]. Once built, a tree is
//! walked by [`traverse`] without consulting a mapper again.
//!
//! ```
//! use jmap::mapper::PlainMapper;
//! use jmap::tree::{Node, build};
//! use jmap::value::Value;
//!
//! let value = Value::from(serde_json::json!({"a": 1, "c": {"x": 3}}));
//! let tree = build(&value, 0, &PlainMapper)?;
//! assert!(matches!(tree.get("c"), Some(Node::Internal(_))));
//! assert!(matches!(tree.get("a"), Some(Node::Leaf(_))));
//! # Ok::<(), jmap::Error>(())
//! ```

use std::collections::{HashMap, hash_map};

use tracing::debug;

use crate::{
    flat::config::effective_depth,
    mapper::Mapper,
    value::{Map, Value},
};

pub mod errors;
mod visitor;

pub use errors::TreeError;
pub use visitor::{Visitor, traverse};

/// A node of a canonical tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal value. May still be a map if it sat below the depth limit.
    Leaf(Value),
    /// Map node to be traversed
    Internal(Tree),
}

impl Node {
    pub fn is_internal(&self) -> bool {
        matches!(self, Node::Internal(_))
    }

    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Internal(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Node::Internal(tree) => Some(tree),
            Node::Leaf(_) => None,
        }
    }

    /// Converts back into a plain value, internal nodes becoming [`Value::Map`].
    pub fn into_value(self) -> Value {
        match self {
            Node::Leaf(value) => value,
            Node::Internal(tree) => Value::Map(tree.into_map()),
        }
    }
}

/// An internal node: string keys mapped to child nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    children: HashMap<String, Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children.get(key)
    }

    /// Follows `path` through internal nodes.
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.children.get(first.as_ref())?;
        for segment in rest {
            node = node.as_tree()?.children.get(segment.as_ref())?;
        }
        Some(node)
    }

    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        self.children.insert(key.into(), node)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Node> {
        self.children.iter()
    }

    /// Converts back into a nested map.
    pub fn into_map(self) -> Map {
        self.children
            .into_iter()
            .map(|(key, node)| (key, node.into_value()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a String, &'a Node);
    type IntoIter = hash_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a canonical tree from a map-like value.
///
/// Maps nested below `max_depth` levels (zero applies the default ceiling)
/// are kept whole as [`Node::Leaf`], as flatten does.
///
/// # Errors
/// - [`TreeError::NotAMap`] if `mapper` does not recognize `value`
/// - [`TreeError::Incomplete`] if unpacking a map fails; the error carries
///   everything built so far, including the failing child attached to its
///   parent
pub fn build(value: &Value, max_depth: usize, mapper: &dyn Mapper) -> Result<Tree, TreeError> {
    if !mapper.is_map(value) {
        return Err(TreeError::NotAMap {
            type_name: value.type_name(),
        });
    }

    let max_depth = effective_depth(max_depth);
    debug!(max_depth, mapper = mapper.name(), "Building canonical tree");

    let mut tree = Tree::new();
    match build_level(value, max_depth, mapper, &mut tree, &mut Vec::new()) {
        Ok(()) => Ok(tree),
        Err(source) => Err(TreeError::Incomplete {
            partial: tree,
            source: Box::new(source),
        }),
    }
}

// `value` has passed `mapper.is_map` and `into` is its node
fn build_level(
    value: &Value,
    depth: usize,
    mapper: &dyn Mapper,
    into: &mut Tree,
    path: &mut Vec<String>,
) -> Result<(), TreeError> {
    let entries = mapper.unpack(value).map_err(|source| TreeError::Unpack {
        path: path.join("."),
        source,
    })?;

    for (key, child) in entries {
        if depth > 1 && mapper.is_map(child) {
            path.push(key.to_string());
            let mut node = Tree::new();
            let result = build_level(child, depth - 1, mapper, &mut node, path);
            path.pop();
            // Attach before propagating so callers see partial results
            into.insert(key, Node::Internal(node));
            result?;
        } else {
            into.insert(key, Node::Leaf(child.clone()));
        }
    }
    Ok(())
}
