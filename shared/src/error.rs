//! Error types for the playground helpers.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the input validators.
///
/// Each variant names the constraint that failed; the `Display` output is the
/// message returned to API callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string could not be parsed as a URL.
    #[error("Invalid URL format")]
    InvalidUrl,

    /// The URL parsed but uses a scheme other than http or https.
    #[error("Only HTTP and HTTPS protocols are allowed")]
    DisallowedScheme,

    /// The method is not in the allow-list.
    #[error("Invalid HTTP method: {0}")]
    InvalidHttpMethod(String),

    /// Code snippet longer than the configured limit.
    #[error("Code length exceeds maximum allowed length of {max_length} characters")]
    CodeTooLong { max_length: usize },

    /// Code snippet matched one of the denylist patterns.
    #[error("Code contains potentially unsafe patterns")]
    UnsafeCode,

    /// Model identifier contains characters outside the allowed set.
    #[error("Invalid model name format")]
    InvalidModelName,

    /// Number is NaN or outside the inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    /// Text is not valid JSON (or does not fit the requested shape).
    #[error("Invalid JSON format")]
    InvalidJson,
}

impl ValidationError {
    /// Field name for range errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::OutOfRange { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Errors that can occur in the playground helpers.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            _ => 500,
        }
    }
}
