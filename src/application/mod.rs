//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change a session's scenario store; query handlers only
//! read it.

pub mod handlers;

pub use handlers::{
    // Budget handlers
    CalculateBudgetHandler, CalculateBudgetQuery,
    ExportBudgetCommand, ExportBudgetHandler, ExportBudgetResult,
    // Scenario handlers
    ClearScenariosCommand, ClearScenariosHandler,
    CompareScenariosHandler, CompareScenariosQuery, CompareScenariosResult,
    ExportComparisonCommand, ExportComparisonHandler,
    RemoveScenarioCommand, RemoveScenarioHandler,
    SaveScenarioCommand, SaveScenarioHandler, SaveScenarioResult,
    SelectScenarioCommand, SelectScenarioHandler,
    // Errors
    HandlerError,
};
