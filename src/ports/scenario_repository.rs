//! Scenario repository port.
//!
//! Defines the contract for keeping a planning session's scenario store
//! between requests. The engine never persists anything itself; deployments
//! plug in whatever storage they use.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, PlanningSessionId};
use crate::domain::scenario::ScenarioStore;

/// Repository port for per-session scenario stores.
///
/// Each store belongs to exactly one planning session; implementations
/// must never hand one session's store to another.
///
/// Stores carry no version. Handlers load, change and save a whole store,
/// so callers must serialize writes per session; two interleaved writers
/// for the same session lose the earlier save (last writer wins).
#[async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// Load the store for a session.
    ///
    /// Returns `None` if the session has never saved a scenario.
    async fn load(&self, session_id: PlanningSessionId)
        -> Result<Option<ScenarioStore>, RepositoryError>;

    /// Replace the stored store for a session.
    ///
    /// Overwrites unconditionally; there is no compare-and-swap.
    async fn save(
        &self,
        session_id: PlanningSessionId,
        store: &ScenarioStore,
    ) -> Result<(), RepositoryError>;

    /// Drop a session's store. Deleting a missing store is not an error.
    async fn delete(&self, session_id: PlanningSessionId) -> Result<(), RepositoryError>;
}

/// Errors from scenario persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize scenario store: {0}")]
    Serialization(String),
}

impl RepositoryError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::RepositoryError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ScenarioRepository) {}
    }

    #[test]
    fn repository_error_displays_reason() {
        let err = RepositoryError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: connection refused");
        assert_eq!(err.code(), ErrorCode::RepositoryError);
    }
}
