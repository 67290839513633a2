//! Error types for the fallible enum lookups and exports.
//!
//! The core coercion operations never fail: a miss is `None`. These errors
//! only surface from strict lookups, deserialization and JSON encoding.

use thiserror::Error;

/// Errors raised by strict lookups and exports.
#[derive(Debug, Error)]
pub enum EnumError {
    #[error("'{input}' is not a valid backing value for enum {type_name}")]
    NoMatch {
        type_name: &'static str,
        input: String,
    },

    #[error("'{name}' is not a declared case of enum {type_name}")]
    UnknownName {
        type_name: &'static str,
        name: String,
    },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Encoded JSON is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl EnumError {
    /// Returns true if the error is a lookup miss rather than an encoding failure.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, EnumError::NoMatch { .. } | EnumError::UnknownName { .. })
    }
}

pub type Result<T> = std::result::Result<T, EnumError>;
