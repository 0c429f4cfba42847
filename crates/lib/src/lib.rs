//!
//! jmap: reversible flattening of nested string-keyed trees.
//!
//! This library converts arbitrarily nested key-value trees into flat,
//! single-level maps whose keys encode the original path (`a.b.c`), and
//! rebuilds the trees from those maps.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: The dynamically-typed values trees are built from: scalars of every width, text, sequences, and two string-keyed map shapes.
//! * **Mappers (`mapper::Mapper`)**: Pluggable strategies deciding which values count as maps and listing their entries. The narrow `PlainMapper` and the broad `KeyedMapper` are provided.
//! * **Flatten (`flat`)**: Depth-bounded conversion of a tree into a flat map and back, with configurable separator and key prefix.
//! * **Canonical Trees (`tree::Tree`)**: Trees with explicitly tagged internal nodes, built once through a mapper and walked with a `tree::Visitor`.
//! * **PriMaps (`primap::PriMap`)**: Maps restricted to normalized primitive scalars, with JSON encoding.
//!
//! ```
//! use jmap::{flat, value::Value};
//!
//! let tree = Value::from(serde_json::json!({"a": 1, "b": 2, "c": {"x": 3, "y": 4}}));
//! let flat = flat::flatten(&tree, 0, ".")?;
//!
//! let mut keys: Vec<_> = flat.keys().cloned().collect();
//! keys.sort();
//! assert_eq!(keys, ["a", "b", "c.x", "c.y"]);
//! # Ok::<(), jmap::Error>(())
//! ```

pub mod constants;
pub mod flat;
pub mod mapper;
pub mod primap;
pub mod tree;
pub mod value;

/// Re-export the most used types for easier access.
pub use flat::{Config, FlatMap, FlatRef, flatten, unflatten};
pub use mapper::{KeyedMapper, Mapper, PlainMapper};
pub use primap::PriMap;
pub use tree::{Node, Tree, Visitor};
pub use value::{Map, Value};

/// Result type used throughout the jmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the jmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured value errors from the value module
    #[error(transparent)]
    Value(value::ValueError),

    /// Structured flatten/unflatten errors from the flat module
    #[error(transparent)]
    Flatten(flat::FlattenError),

    /// Structured canonical tree errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Structured primitive map errors from the primap module
    #[error(transparent)]
    PriMap(primap::PriMapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Flatten(_) => "flat",
            Error::Tree(_) => "tree",
            Error::PriMap(_) => "primap",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error rejected an input that is not a map.
    pub fn is_not_a_map(&self) -> bool {
        match self {
            Error::Flatten(err) => err.is_not_a_map(),
            Error::Tree(err) => err.is_not_a_map(),
            _ => false,
        }
    }

    /// Check if this error is an unflatten path collision.
    pub fn is_collision(&self) -> bool {
        match self {
            Error::Flatten(err) => err.is_collision(),
            _ => false,
        }
    }

    /// Check if this error reports values that failed normalization.
    pub fn is_normalization_error(&self) -> bool {
        matches!(self, Error::PriMap(_))
    }

    /// Check if a typed map rejected a value of the wrong kind.
    pub fn is_kind_mismatch(&self) -> bool {
        match self {
            Error::Value(err) => err.is_kind_mismatch(),
            _ => false,
        }
    }

    /// Check if this error came from encoding or decoding.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
