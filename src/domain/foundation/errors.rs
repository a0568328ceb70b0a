//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction or parameter checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must not be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' must be at most {max}, got {actual}")]
    TooLarge { field: String, max: f64, actual: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a negative value validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates a non-finite value validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates an above-maximum validation error.
    pub fn too_large(field: impl Into<String>, max: f64, actual: f64) -> Self {
        ValidationError::TooLarge {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::TooLarge { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
///
/// Callers map handler errors onto these to report a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    ScenarioNotFound,

    // Capacity errors
    ScenarioLimitReached,

    // Infrastructure errors
    RepositoryError,
    ExportFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::ScenarioNotFound => "SCENARIO_NOT_FOUND",
            ErrorCode::ScenarioLimitReached => "SCENARIO_LIMIT_REACHED",
            ErrorCode::RepositoryError => "REPOSITORY_ERROR",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}
