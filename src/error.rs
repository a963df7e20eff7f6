//! Error types for the Employee Record Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating input,
//! mutating a record, or loading rate configuration.

use thiserror::Error;

/// The broad category an [`EngineError`] belongs to.
///
/// Record operations only ever fail with [`ErrorKind::Type`] or
/// [`ErrorKind::Value`]; [`ErrorKind::Config`] is reserved for rate table
/// loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument had the wrong runtime type (text or integer expected).
    Type,
    /// An argument had the right type but an unacceptable value.
    Value,
    /// Rate configuration could not be found, parsed, or accepted.
    Config,
}

/// The main error type for the Employee Record Engine.
///
/// # Example
///
/// ```
/// use employee_record::error::{EngineError, ErrorKind};
///
/// let error = EngineError::InvalidValue {
///     field: "name".to_string(),
///     message: "must not be empty".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid value for 'name': must not be empty");
/// assert_eq!(error.kind(), ErrorKind::Value);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An argument was not of the expected type.
    #[error("Invalid type for '{field}': expected {expected}")]
    InvalidType {
        /// The argument that had the wrong type.
        field: String,
        /// A description of the expected type (e.g. "text", "integer").
        expected: String,
    },

    /// An argument had the right type but an invalid value.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// The argument that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A JSON command did not match any known action.
    #[error("Malformed command: {message}")]
    MalformedCommand {
        /// A description of the parse failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable rate table.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidType`].
    pub fn invalid_type(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Builds an [`EngineError::InvalidValue`].
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } | Self::MalformedCommand { .. } => ErrorKind::Type,
            Self::InvalidValue { .. } => ErrorKind::Value,
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::InvalidConfig { .. } => ErrorKind::Config,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
