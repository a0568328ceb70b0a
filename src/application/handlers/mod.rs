//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod budget;
mod errors;
pub mod scenario;

pub use budget::{
    CalculateBudgetHandler, CalculateBudgetQuery, ExportBudgetCommand, ExportBudgetHandler,
    ExportBudgetResult,
};
pub use errors::HandlerError;
pub use scenario::{
    ClearScenariosCommand, ClearScenariosHandler, CompareScenariosHandler, CompareScenariosQuery,
    CompareScenariosResult, ExportComparisonCommand, ExportComparisonHandler,
    RemoveScenarioCommand, RemoveScenarioHandler, SaveScenarioCommand, SaveScenarioHandler,
    SaveScenarioResult, SelectScenarioCommand, SelectScenarioHandler,
};
