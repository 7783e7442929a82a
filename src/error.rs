//! Error types for the shift engine.
//!
//! The work-day predicate itself never fails. These errors come from the
//! surrounding operations: configuration loading, worker validation and
//! request checks.

use thiserror::Error;

/// The main error type for the shift engine.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A worker configuration was invalid or contained inconsistent data.
    #[error("Invalid worker field '{field}': {message}")]
    InvalidWorker {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A date string could not be parsed as `yyyy-MM-dd`.
    #[error("Invalid date '{value}': expected yyyy-MM-dd")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A query was structurally valid but semantically unusable.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
