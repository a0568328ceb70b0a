//! CompareScenariosHandler - Query handler for side-by-side comparison.

use std::sync::Arc;

use crate::application::handlers::HandlerError;
use crate::domain::foundation::PlanningSessionId;
use crate::domain::scenario::{
    ComparisonAnalyzer, ComparisonInsights, Scenario, ScenarioCostDelta,
};
use crate::ports::ScenarioRepository;

/// Query for a session's comparison view.
#[derive(Debug, Clone)]
pub struct CompareScenariosQuery {
    pub session_id: PlanningSessionId,
}

/// Everything needed to render the comparison.
#[derive(Debug, Clone)]
pub struct CompareScenariosResult {
    /// Scenarios in the order they were saved.
    pub scenarios: Vec<Scenario>,
    /// `None` with fewer than two scenarios.
    pub insights: Option<ComparisonInsights>,
    pub differences: Vec<ScenarioCostDelta>,
    pub selected: Option<Scenario>,
}

/// Handler for comparing scenarios.
pub struct CompareScenariosHandler {
    repository: Arc<dyn ScenarioRepository>,
}

impl CompareScenariosHandler {
    pub fn new(repository: Arc<dyn ScenarioRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: CompareScenariosQuery,
    ) -> Result<CompareScenariosResult, HandlerError> {
        let Some(store) = self.repository.load(query.session_id).await? else {
            return Ok(CompareScenariosResult {
                scenarios: Vec::new(),
                insights: None,
                differences: Vec::new(),
                selected: None,
            });
        };

        Ok(CompareScenariosResult {
            insights: store.compare(),
            differences: ComparisonAnalyzer::cost_differences(store.list()),
            selected: store.selected().cloned(),
            scenarios: store.list().to_vec(),
        })
    }
}
