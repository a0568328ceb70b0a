//! Scenario store errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ScenarioId};

/// Recoverable outcomes of scenario store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// The store already holds its maximum number of scenarios.
    #[error("Scenario limit of {capacity} reached; remove a scenario before saving another")]
    MaxCapacity { capacity: usize },

    #[error("Scenario not found: {0}")]
    NotFound(ScenarioId),

    #[error("Invalid scenario snapshot: {0}")]
    InvalidSnapshot(String),
}

impl ScenarioError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScenarioError::MaxCapacity { .. } => ErrorCode::ScenarioLimitReached,
            ScenarioError::NotFound(_) => ErrorCode::ScenarioNotFound,
            ScenarioError::InvalidSnapshot(_) => ErrorCode::ValidationFailed,
        }
    }
}
