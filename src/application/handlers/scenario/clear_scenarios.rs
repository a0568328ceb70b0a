//! ClearScenariosHandler - Command handler for emptying a session's store.

use std::sync::Arc;

use crate::application::handlers::HandlerError;
use crate::domain::foundation::PlanningSessionId;
use crate::ports::ScenarioRepository;

/// Command to clear all scenarios of a session.
#[derive(Debug, Clone)]
pub struct ClearScenariosCommand {
    pub session_id: PlanningSessionId,
}

/// Handler for clearing scenarios.
pub struct ClearScenariosHandler {
    repository: Arc<dyn ScenarioRepository>,
}

impl ClearScenariosHandler {
    pub fn new(repository: Arc<dyn ScenarioRepository>) -> Self {
        Self { repository }
    }

    /// Returns how many scenarios were removed.
    pub async fn handle(&self, cmd: ClearScenariosCommand) -> Result<usize, HandlerError> {
        let Some(mut store) = self.repository.load(cmd.session_id).await? else {
            return Ok(0);
        };

        let removed = store.len();
        store.clear();
        self.repository.save(cmd.session_id, &store).await?;

        tracing::info!(session_id = %cmd.session_id, removed, "Scenarios cleared");
        Ok(removed)
    }
}
