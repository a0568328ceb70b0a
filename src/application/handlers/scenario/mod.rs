//! Scenario handlers - saving, selecting, comparing and exporting the
//! scenarios of one planning session.
//!
//! Every handler loads the session's store from the repository, applies one
//! store operation, and writes the store back when it changed.

mod clear_scenarios;
mod compare_scenarios;
mod export_comparison;
mod remove_scenario;
mod save_scenario;
mod select_scenario;

#[cfg(test)]
pub(crate) mod test_support;

pub use clear_scenarios::{ClearScenariosCommand, ClearScenariosHandler};
pub use compare_scenarios::{
    CompareScenariosHandler, CompareScenariosQuery, CompareScenariosResult,
};
pub use export_comparison::{ExportComparisonCommand, ExportComparisonHandler};
pub use remove_scenario::{RemoveScenarioCommand, RemoveScenarioHandler};
pub use save_scenario::{SaveScenarioCommand, SaveScenarioHandler, SaveScenarioResult};
pub use select_scenario::{SelectScenarioCommand, SelectScenarioHandler};

use crate::application::handlers::HandlerError;
use crate::domain::foundation::PlanningSessionId;
use crate::domain::scenario::ScenarioStore;
use crate::ports::ScenarioRepository;

/// Loads a session's store, or an empty one when nothing was saved yet.
async fn load_store(
    repository: &dyn ScenarioRepository,
    session_id: PlanningSessionId,
    capacity: usize,
) -> Result<ScenarioStore, HandlerError> {
    let store = repository.load(session_id).await?;
    Ok(store.unwrap_or_else(|| ScenarioStore::with_capacity(capacity)))
}
