//! Error types for index construction, grid sweeps and record decoding.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors raised by the engine.
///
/// An empty record set is not an error: it yields an empty index and an
/// empty cell sequence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    /// Non-positive or non-finite step/radius, degenerate extent, or an
    /// unusable index configuration. Raised before any traversal starts.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A decoded record does not satisfy the record shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {context}: {message}")]
    Serialization { context: String, message: String },
}

impl FieldError {
    pub(crate) fn serialization(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        FieldError::Serialization {
            context: context.into(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        FieldError::serialization("JSON", err)
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for FieldError {
    fn from(err: toml::de::Error) -> Self {
        FieldError::serialization("TOML decode", err)
    }
}

#[cfg(feature = "toml")]
impl From<toml::ser::Error> for FieldError {
    fn from(err: toml::ser::Error) -> Self {
        FieldError::serialization("TOML encode", err)
    }
}
