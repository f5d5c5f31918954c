//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every variant is caller-facing and synchronous; none of them are retried.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected by expense validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date range bound could not be parsed.
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::InvalidDateRange(_) => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::InvalidDateRange(_) => "invalid_date_range",
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
