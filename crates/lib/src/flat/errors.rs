//! Error types for flatten and unflatten operations.

use thiserror::Error;

use crate::mapper::MapperError;

/// Structured error types for the flatten engine.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlattenError {
    /// The top-level input is not a map under the configured mapper
    #[error("Not a string-keyed map: found {type_name}")]
    NotAMap { type_name: &'static str },

    /// An intermediate path segment already holds a non-map value
    #[error("Path {path} has invalid intermediate at {index} key {key}")]
    PathCollision {
        path: String,
        index: usize,
        key: String,
    },

    /// The mapper could not list the entries of a map
    #[error(transparent)]
    Mapper(#[from] MapperError),
}

impl FlattenError {
    /// Check if the input was rejected for not being a map
    pub fn is_not_a_map(&self) -> bool {
        matches!(self, FlattenError::NotAMap { .. })
    }

    /// Check if this error is a structural collision during unflatten
    pub fn is_collision(&self) -> bool {
        matches!(self, FlattenError::PathCollision { .. })
    }

    /// Get the offending flat key if this is a collision
    pub fn path(&self) -> Option<&str> {
        match self {
            FlattenError::PathCollision { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the conflicting segment if this is a collision
    pub fn key(&self) -> Option<&str> {
        match self {
            FlattenError::PathCollision { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl From<FlattenError> for crate::Error {
    fn from(err: FlattenError) -> Self {
        crate::Error::Flatten(err)
    }
}
