//! Error types for primitive maps.

use thiserror::Error;

/// Structured error types for [`PriMap`](super::PriMap) operations.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriMapError {
    /// A single value could not be normalized
    #[error("Not a primitive ({type_name}): {reason}")]
    NotPrimitive {
        type_name: &'static str,
        reason: String,
    },

    /// One or more replacement values failed normalization
    #[error("Invalid values: {}", keys.join(", "))]
    InvalidValues { keys: Vec<String> },
}

impl PriMapError {
    /// Check if this error concerns a single non-primitive value
    pub fn is_not_primitive(&self) -> bool {
        matches!(self, PriMapError::NotPrimitive { .. })
    }

    /// Check if this error reports failed replacement keys
    pub fn is_invalid_values(&self) -> bool {
        matches!(self, PriMapError::InvalidValues { .. })
    }

    /// Keys that failed normalization, sorted; empty for other errors
    pub fn invalid_keys(&self) -> &[String] {
        match self {
            PriMapError::InvalidValues { keys } => keys,
            _ => &[],
        }
    }
}

impl From<PriMapError> for crate::Error {
    fn from(err: PriMapError) -> Self {
        crate::Error::PriMap(err)
    }
}
