//! Error types for boulder operations.

use thiserror::Error;

/// Errors that can occur in boulder operations.
#[derive(Error, Debug)]
pub enum BoulderError {
    #[error("Invalid date format '{0}'. Expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BoulderError {
    /// True for errors caused by user input rather than storage.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, BoulderError::InvalidDateFormat(_))
    }
}

/// Result type alias for boulder operations.
pub type BoulderResult<T> = Result<T, BoulderError>;
