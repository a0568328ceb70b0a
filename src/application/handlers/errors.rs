//! Handler error type shared by the application layer.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::scenario::ScenarioError;
use crate::ports::{ExportError, RepositoryError};

/// Everything an application handler can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandlerError {
    #[error("Invalid event parameters: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl HandlerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            HandlerError::Validation(_) => ErrorCode::ValidationFailed,
            HandlerError::Scenario(e) => e.code(),
            HandlerError::Repository(e) => e.code(),
            HandlerError::Export(e) => e.code(),
        }
    }
}
