//! Error types for the HR Insights Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing HR summaries.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the HR Insights Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hr_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/allowances.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/allowances.yaml");
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

    /// A date string could not be parsed.
    ///
    /// Callers typically render this as a placeholder ("—") or a validation
    /// message rather than failing the whole request.
    #[error("Invalid date: {value}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A date range had its end before its start.
    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidDateRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// A leave submission requested more days than the employee has left.
    #[error("Insufficient leave balance: requested {requested} days, {remaining} remaining")]
    InsufficientBalance {
        /// The number of days requested.
        requested: u32,
        /// The number of days remaining.
        remaining: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
