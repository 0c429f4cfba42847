//! Error types for mapper operations.

use thiserror::Error;

use crate::value::Value;

/// Structured error types for unpacking map-like values.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MapperError {
    /// `unpack` was called on a value the mapper does not recognize
    #[error("{mapper} mapper does not recognize a value of type {type_name} as a map")]
    NotRecognized {
        mapper: &'static str,
        type_name: &'static str,
    },

    /// A custom mapper could not list the entries of a recognized map
    #[error("{mapper} mapper failed to unpack map: {reason}")]
    UnpackFailed {
        mapper: &'static str,
        reason: String,
    },
}

impl MapperError {
    pub(crate) fn not_recognized(mapper: &'static str, value: &Value) -> Self {
        MapperError::NotRecognized {
            mapper,
            type_name: value.type_name(),
        }
    }

    /// Check if `unpack` was called on an unrecognized value
    pub fn is_not_recognized(&self) -> bool {
        matches!(self, MapperError::NotRecognized { .. })
    }

    /// Check if a recognized map failed to unpack
    pub fn is_unpack_failure(&self) -> bool {
        matches!(self, MapperError::UnpackFailed { .. })
    }

    /// Name of the mapper that raised this error
    pub fn mapper(&self) -> &'static str {
        match self {
            MapperError::NotRecognized { mapper, .. } | MapperError::UnpackFailed { mapper, .. } => {
                mapper
            }
        }
    }
}
