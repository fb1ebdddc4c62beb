//! Engine error types
//!
//! Bad evidence never produces an error; it becomes a diagnostic on the week.
//! These errors cover caller misuse only.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A week was submitted out of chronological order
    #[error("Week {date} is not after the last recorded week {last}")]
    OutOfOrder {
        /// Date of the rejected week
        date: NaiveDate,
        /// Date of the most recent recorded week
        last: NaiveDate,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
