//! SelectScenarioHandler - Command handler for marking the current scenario.

use std::sync::Arc;

use crate::application::handlers::HandlerError;
use crate::domain::foundation::{PlanningSessionId, ScenarioId};
use crate::domain::scenario::{Scenario, ScenarioError};
use crate::ports::ScenarioRepository;

/// Command to select a scenario.
#[derive(Debug, Clone)]
pub struct SelectScenarioCommand {
    pub session_id: PlanningSessionId,
    pub scenario_id: ScenarioId,
}

/// Handler for scenario selection.
pub struct SelectScenarioHandler {
    repository: Arc<dyn ScenarioRepository>,
}

impl SelectScenarioHandler {
    pub fn new(repository: Arc<dyn ScenarioRepository>) -> Self {
        Self { repository }
    }

    /// Returns the newly selected scenario.
    pub async fn handle(&self, cmd: SelectScenarioCommand) -> Result<Scenario, HandlerError> {
        let mut store = self
            .repository
            .load(cmd.session_id)
            .await?
            .ok_or(ScenarioError::NotFound(cmd.scenario_id))?;

        let selected = store.select(cmd.scenario_id)?.clone();
        self.repository.save(cmd.session_id, &store).await?;

        tracing::debug!(scenario_id = %selected.id(), "Scenario selected");
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryScenarioRepository;
    use crate::application::handlers::scenario::test_support::{
        austin_conference, new_york_outdoor,
    };
    use crate::domain::pricing::calculate;
    use crate::domain::scenario::ScenarioStore;

    #[tokio::test]
    async fn selection_is_persisted() {
        let repo = Arc::new(InMemoryScenarioRepository::new());
        let session_id = PlanningSessionId::new();

        let mut store = ScenarioStore::new();
        let austin = austin_conference();
        store.add("Austin", austin.clone(), calculate(&austin)).unwrap();
        let new_york = new_york_outdoor();
        let target = store
            .add("New York", new_york.clone(), calculate(&new_york))
            .unwrap()
            .id();
        repo.save(session_id, &store).await.unwrap();

        let selected = SelectScenarioHandler::new(repo.clone())
            .handle(SelectScenarioCommand {
                session_id,
                scenario_id: target,
            })
            .await
            .unwrap();

        assert_eq!(selected.name(), "New York");
        let stored = repo.load(session_id).await.unwrap().unwrap();
        assert_eq!(stored.selected().map(Scenario::id), Some(target));
    }

    #[tokio::test]
    async fn selecting_unknown_scenario_fails() {
        let repo = Arc::new(InMemoryScenarioRepository::new());
        let session_id = PlanningSessionId::new();
        let missing = ScenarioId::new();

        let result = SelectScenarioHandler::new(repo)
            .handle(SelectScenarioCommand {
                session_id,
                scenario_id: missing,
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            HandlerError::Scenario(ScenarioError::NotFound(missing))
        );
    }
}
