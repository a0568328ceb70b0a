//! ExportBudgetHandler - Prices parameters and renders the export document.

use std::sync::Arc;

use crate::application::handlers::HandlerError;
use crate::domain::export::{ExportDocument, ExportFormatter};
use crate::domain::pricing::{BudgetBreakdown, BudgetCalculator, EventParameters};
use crate::ports::{DocumentExporter, ExportFormat, ExportedDocument};

/// Command to export a single budget.
#[derive(Debug, Clone)]
pub struct ExportBudgetCommand {
    pub parameters: EventParameters,
    /// Falls back to the handler's default format when unset.
    pub format: Option<ExportFormat>,
}

/// Result of a budget export.
#[derive(Debug, Clone)]
pub struct ExportBudgetResult {
    pub breakdown: BudgetBreakdown,
    pub document: ExportedDocument,
}

/// Handler for single-budget exports.
pub struct ExportBudgetHandler {
    calculator: Arc<dyn BudgetCalculator>,
    exporter: Arc<dyn DocumentExporter>,
    default_format: ExportFormat,
}

impl ExportBudgetHandler {
    pub fn new(
        calculator: Arc<dyn BudgetCalculator>,
        exporter: Arc<dyn DocumentExporter>,
        default_format: ExportFormat,
    ) -> Self {
        Self {
            calculator,
            exporter,
            default_format,
        }
    }

    pub fn handle(&self, cmd: ExportBudgetCommand) -> Result<ExportBudgetResult, HandlerError> {
        cmd.parameters.validate()?;
        let breakdown = self.calculator.calculate(&cmd.parameters);

        let format = cmd.format.unwrap_or(self.default_format);
        let doc = ExportFormatter::format_single(&cmd.parameters, &breakdown);
        let document = self.exporter.export(&ExportDocument::from(doc), format)?;

        tracing::info!(
            filename = %document.filename,
            grand_total = breakdown.grand_total(),
            "Budget exported"
        );
        Ok(ExportBudgetResult {
            breakdown,
            document,
        })
    }
}
