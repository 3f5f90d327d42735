//! Common error types for the Razzie awards service

use thiserror::Error;

/// Common result type for Razzie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the library and the API binary
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Stored win record failed validation before interval extraction
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Malformed win record rejected by the interval extractor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Producer name absent or blank
    #[error("win record has no producer (year {year:?})")]
    MissingProducer { year: Option<String> },

    /// Year absent
    #[error("win record for '{producer}' has no year")]
    MissingYear { producer: String },

    /// Year present but not an integer in the accepted range
    #[error("win record for '{producer}' has invalid year '{value}'")]
    InvalidYear { producer: String, value: String },
}

impl Error {
    /// True when the error was caused by bad input rather than an
    /// infrastructure failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::InvalidInput(_))
    }
}
