//! Pre/post-order walks over canonical trees.

use super::{Node, Tree};

/// Callbacks invoked around each internal node during [`traverse`].
///
/// `key` is the node's key in its parent (`""` for the root) and `path`
/// holds the keys from the root down to and including `key`. Leaves are not
/// visited on their own; read them from `node`.
pub trait Visitor {
    /// Called before any child of `node` is visited
    fn enter(&mut self, key: &str, node: &Tree, path: &[String]) {
        let _ = (key, node, path);
    }

    /// Called after every child of `node` has been visited
    fn leave(&mut self, key: &str, node: &Tree, path: &[String]) {
        let _ = (key, node, path);
    }
}

/// Walks every internal node of `tree`, root first.
///
/// Sibling order follows the tree's iteration order and is unspecified.
///
/// ```
/// use jmap::mapper::PlainMapper;
/// use jmap::tree::{Tree, Visitor, build, traverse};
/// use jmap::value::Value;
///
/// #[derive(Default)]
/// struct LeafCount(usize);
///
/// impl Visitor for LeafCount {
///     fn enter(&mut self, _key: &str, node: &Tree, _path: &[String]) {
///         self.0 += node.iter().filter(|(_, child)| !child.is_internal()).count();
///     }
/// }
///
/// let value = Value::from(serde_json::json!({"a": 1, "b": {"c": 2, "d": 3}}));
/// let tree = build(&value, 0, &PlainMapper)?;
/// let mut count = LeafCount::default();
/// traverse(&tree, &mut count);
/// assert_eq!(count.0, 3);
/// # Ok::<(), jmap::Error>(())
/// ```
pub fn traverse<V: Visitor + ?Sized>(tree: &Tree, visitor: &mut V) {
    let mut path = Vec::new();
    walk("", tree, &mut path, visitor);
}

fn walk<V: Visitor + ?Sized>(key: &str, tree: &Tree, path: &mut Vec<String>, visitor: &mut V) {
    visitor.enter(key, tree, path);
    for (child_key, child) in tree {
        if let Node::Internal(subtree) = child {
            path.push(child_key.clone());
            walk(child_key, subtree, path, visitor);
            path.pop();
        }
    }
    visitor.leave(key, tree, path);
}
