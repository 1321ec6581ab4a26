//! Error types for partially-typed API payloads.

use thiserror::Error;

/// A response did not have the shape a partial schema expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required field is absent.
    #[error("Missing field '{path}'")]
    MissingField {
        /// Dotted JSON path of the field
        path: &'static str,
    },

    /// A field is present but holds the wrong JSON type.
    #[error("Field '{path}' has the wrong type: expected {expected}")]
    WrongType {
        /// Dotted JSON path of the field
        path: &'static str,
        /// Expected JSON type
        expected: &'static str,
    },
}
