//! Shared fixtures for scenario handler tests.

use async_trait::async_trait;

use crate::domain::foundation::PlanningSessionId;
use crate::domain::pricing::EventParameters;
use crate::domain::scenario::ScenarioStore;
use crate::ports::{RepositoryError, ScenarioRepository};

/// Repository whose every call fails.
pub struct UnavailableRepository;

#[async_trait]
impl ScenarioRepository for UnavailableRepository {
    async fn load(
        &self,
        _session_id: PlanningSessionId,
    ) -> Result<Option<ScenarioStore>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }

    async fn save(
        &self,
        _session_id: PlanningSessionId,
        _store: &ScenarioStore,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _session_id: PlanningSessionId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}

/// Austin corporate event at a conference center, 50 guests with buffet.
/// Grand total 5234.
pub fn austin_conference() -> EventParameters {
    EventParameters::new("austin", "corporate", "conference-center")
        .with_audience_size(50)
        .with_catering("buffet")
}

/// Same event held outdoors in New York, which adds permits.
/// Grand total 8152.
pub fn new_york_outdoor() -> EventParameters {
    EventParameters::new("new-york", "outdoor-venue", "conference-center")
        .with_audience_size(50)
        .with_catering("buffet")
}
