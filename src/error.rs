//! Unified error types for line-history.
//!
//! The parser itself never fails on line content: every line of an export is
//! classified somehow. Errors only come from the edges of the library, such as
//! opening or reading the input, parsing filter arguments, or writing output.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for line-history operations.
///
/// # Example
///
/// ```rust
/// use line_history::error::Result;
/// use line_history::Entry;
///
/// fn load() -> Result<Vec<Entry>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, HistoryError>;

/// The error type for all line-history operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HistoryError {
    /// An I/O error occurred.
    ///
    /// Raised when the export cannot be opened or read (including input that
    /// is not valid UTF-8), or when an output file cannot be written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A date argument could not be parsed.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A time-of-day argument could not be parsed.
    #[error("Invalid time '{input}'. Expected format: {expected}")]
    InvalidTime {
        /// The invalid time string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A message pattern is not a valid regular expression.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A format name or file extension was not recognised.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HistoryError {
    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        HistoryError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid time error.
    pub fn invalid_time(input: impl Into<String>) -> Self {
        HistoryError::InvalidTime {
            input: input.into(),
            expected: "HH:MM",
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        HistoryError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        HistoryError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, HistoryError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, HistoryError::InvalidDate { .. })
    }

    /// Returns `true` if this is a time-related error.
    pub fn is_invalid_time(&self) -> bool {
        matches!(self, HistoryError::InvalidTime { .. })
    }

    /// Returns `true` if this is an invalid pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, HistoryError::InvalidPattern { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, HistoryError::InvalidFormat { .. })
    }
}
