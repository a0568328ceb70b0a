//! RemoveScenarioHandler - Command handler for deleting a saved scenario.

use std::sync::Arc;

use crate::application::handlers::HandlerError;
use crate::domain::foundation::{PlanningSessionId, ScenarioId};
use crate::domain::scenario::{Scenario, ScenarioError};
use crate::ports::ScenarioRepository;

/// Command to remove a scenario.
#[derive(Debug, Clone)]
pub struct RemoveScenarioCommand {
    pub session_id: PlanningSessionId,
    pub scenario_id: ScenarioId,
}

/// Handler for removing scenarios.
pub struct RemoveScenarioHandler {
    repository: Arc<dyn ScenarioRepository>,
}

impl RemoveScenarioHandler {
    pub fn new(repository: Arc<dyn ScenarioRepository>) -> Self {
        Self { repository }
    }

    /// Returns the removed scenario.
    pub async fn handle(&self, cmd: RemoveScenarioCommand) -> Result<Scenario, HandlerError> {
        let not_found = || ScenarioError::NotFound(cmd.scenario_id);

        let mut store = self
            .repository
            .load(cmd.session_id)
            .await?
            .ok_or_else(not_found)?;
        let removed = store.remove(cmd.scenario_id).ok_or_else(not_found)?;

        self.repository.save(cmd.session_id, &store).await?;
        Ok(removed)
    }
}
