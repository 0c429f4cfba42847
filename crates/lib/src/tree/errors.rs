//! Error types for canonical tree construction.

use thiserror::Error;

use super::Tree;
use crate::mapper::MapperError;

/// Structured error types for [`build`](super::build).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// The top-level input is not a map under the given mapper
    #[error("Not a valid map: found {type_name}")]
    NotAMap { type_name: &'static str },

    /// A map below the root could not be unpacked
    #[error("Failed to unpack map at '{path}': {source}")]
    Unpack {
        path: String,
        #[source]
        source: MapperError,
    },

    /// Building stopped early; `partial` holds the tree built so far
    #[error("Canonical tree is incomplete: {source}")]
    Incomplete {
        partial: Tree,
        #[source]
        source: Box<TreeError>,
    },
}

impl TreeError {
    /// Check if the input was rejected for not being a map
    pub fn is_not_a_map(&self) -> bool {
        matches!(self, TreeError::NotAMap { .. })
    }

    /// The partially built tree, if building got past the root check
    pub fn partial(&self) -> Option<&Tree> {
        match self {
            TreeError::Incomplete { partial, .. } => Some(partial),
            _ => None,
        }
    }

    /// Takes the partially built tree out of the error
    pub fn into_partial(self) -> Option<Tree> {
        match self {
            TreeError::Incomplete { partial, .. } => Some(partial),
            _ => None,
        }
    }

    /// Path of the map that failed to unpack, joined with "."
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::Unpack { path, .. } => Some(path),
            TreeError::Incomplete { source, .. } => source.path(),
            _ => None,
        }
    }
}

impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
