//! ExportComparisonHandler - Renders a session's scenarios and insights as
//! an export document.

use std::sync::Arc;

use crate::application::handlers::HandlerError;
use crate::domain::export::{ExportDocument, ExportFormatter};
use crate::domain::foundation::PlanningSessionId;
use crate::ports::{DocumentExporter, ExportFormat, ExportedDocument, ScenarioRepository};

/// Command to export a session's comparison.
#[derive(Debug, Clone)]
pub struct ExportComparisonCommand {
    pub session_id: PlanningSessionId,
    pub format: Option<ExportFormat>,
}

/// Handler for comparison exports.
pub struct ExportComparisonHandler {
    repository: Arc<dyn ScenarioRepository>,
    exporter: Arc<dyn DocumentExporter>,
    default_format: ExportFormat,
}

impl ExportComparisonHandler {
    pub fn new(
        repository: Arc<dyn ScenarioRepository>,
        exporter: Arc<dyn DocumentExporter>,
        default_format: ExportFormat,
    ) -> Self {
        Self {
            repository,
            exporter,
            default_format,
        }
    }

    /// An unknown session exports an empty comparison.
    pub async fn handle(
        &self,
        cmd: ExportComparisonCommand,
    ) -> Result<ExportedDocument, HandlerError> {
        let store = self.repository.load(cmd.session_id).await?.unwrap_or_default();

        let insights = store.compare();
        let doc = ExportFormatter::format_comparison(store.list(), insights.as_ref());
        let format = cmd.format.unwrap_or(self.default_format);
        let document = self
            .exporter
            .export(&ExportDocument::from(doc), format)?;

        tracing::info!(
            session_id = %cmd.session_id,
            scenarios = store.len(),
            filename = %document.filename,
            "Scenario comparison exported"
        );
        Ok(document)
    }
}
