//! Error types for typed maps.

use thiserror::Error;

use super::ValueKind;

/// Structured error types for value operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// A typed map rejected an entry of the wrong kind
    #[error("Typed map of {expected} cannot hold {actual} at key '{key}'")]
    KindMismatch {
        key: String,
        expected: ValueKind,
        actual: ValueKind,
    },
}

impl ValueError {
    /// Check if this error was raised by a typed map insert
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, ValueError::KindMismatch { .. })
    }

    /// Get the key if this error concerns a map entry
    pub fn key(&self) -> Option<&str> {
        match self {
            ValueError::KindMismatch { key, .. } => Some(key),
        }
    }
}

impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
