//! Export Module - Serializable summaries of budgets and comparisons.

mod document;
mod formatter;

pub use document::{
    BudgetSummary, ComparisonExportDocument, ComparisonSummary, ExportDocument,
    SingleExportDocument,
};
pub use formatter::ExportFormatter;
