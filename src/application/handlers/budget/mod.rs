//! Budget handlers - pricing and single-budget export.

mod calculate_budget;
mod export_budget;

pub use calculate_budget::{CalculateBudgetHandler, CalculateBudgetQuery};
pub use export_budget::{ExportBudgetCommand, ExportBudgetHandler, ExportBudgetResult};
