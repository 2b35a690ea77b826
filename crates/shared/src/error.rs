//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Repository-level errors map into this taxonomy at the boundary to the
/// presentation layer. An `InvariantViolation` always means the offending
/// write was refused; nothing is clamped or auto-corrected.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed validation before any invariant was consulted.
    #[error("Validation error on {field}: {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// Human-readable message.
        message: String,
    },

    /// A proposed quantity exceeds a remaining bound.
    #[error("Invariant violation on {field}: {message}")]
    InvariantViolation {
        /// The field whose proposed value breaks the bound.
        field: String,
        /// Human-readable message including the bound.
        message: String,
    },

    /// Conflict (e.g., duplicate entry).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation { .. } => 400,
            Self::InvariantViolation { .. } => 422,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvariantViolation { .. } => "INVARIANT_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
