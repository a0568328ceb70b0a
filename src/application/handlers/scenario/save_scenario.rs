//! SaveScenarioHandler - Command handler for saving a calculation as a
//! named scenario.

use std::sync::Arc;

use super::load_store;
use crate::application::handlers::HandlerError;
use crate::domain::foundation::PlanningSessionId;
use crate::domain::pricing::{BudgetCalculator, EventParameters};
use crate::domain::scenario::{Scenario, MAX_SCENARIOS};
use crate::ports::ScenarioRepository;

/// Command to save a scenario.
#[derive(Debug, Clone)]
pub struct SaveScenarioCommand {
    pub session_id: PlanningSessionId,
    /// Blank names are replaced with "Scenario N".
    pub name: String,
    pub parameters: EventParameters,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveScenarioResult {
    pub scenario: Scenario,
    pub remaining_capacity: usize,
}

/// Handler for saving scenarios.
pub struct SaveScenarioHandler {
    repository: Arc<dyn ScenarioRepository>,
    calculator: Arc<dyn BudgetCalculator>,
    capacity: usize,
}

impl SaveScenarioHandler {
    pub fn new(
        repository: Arc<dyn ScenarioRepository>,
        calculator: Arc<dyn BudgetCalculator>,
    ) -> Self {
        Self {
            repository,
            calculator,
            capacity: MAX_SCENARIOS,
        }
    }

    /// Limit used for sessions that have no store yet.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub async fn handle(&self, cmd: SaveScenarioCommand) -> Result<SaveScenarioResult, HandlerError> {
        // 1. Validate input
        cmd.parameters.validate()?;

        // 2. Load the session's store
        let mut store = load_store(self.repository.as_ref(), cmd.session_id, self.capacity).await?;

        // 3. Snapshot the breakdown for exactly these parameters
        let breakdown = self.calculator.calculate(&cmd.parameters);
        let scenario = store.add(cmd.name, cmd.parameters, breakdown)?.clone();

        // 4. Persist
        self.repository.save(cmd.session_id, &store).await?;

        Ok(SaveScenarioResult {
            scenario,
            remaining_capacity: store.remaining_capacity(),
        })
    }
}
