//! Error types for the Workforce Analytics Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Data sparsity (empty arrays, missing rates, unknown references) is never
//! an error in this engine; these variants cover caller contract violations
//! and configuration problems only.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the Workforce Analytics Engine.
///
/// All fallible operations in the engine return this error type. Malformed
/// shift data (negative durations, dangling references) does NOT produce an
/// error; reducers degrade to documented neutral defaults instead. Errors
/// are reserved for invalid caller arguments and broken configuration.
///
/// # Example
///
/// ```
/// use shift_analytics::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/analytics.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/analytics.yaml");
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

    /// Configuration values were out of their allowed bounds.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the invalid value.
        message: String,
    },

    /// A caller-supplied date range had its bounds reversed.
    #[error("Invalid date range: 'from' ({from}) must be before 'to' ({to})")]
    InvalidRange {
        /// The lower bound of the rejected range.
        from: NaiveDateTime,
        /// The upper bound of the rejected range.
        to: NaiveDateTime,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
