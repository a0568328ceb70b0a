//! Serde Document Exporter Adapter
//!
//! Renders export documents as pretty JSON or YAML using serde.

use crate::domain::export::ExportDocument;
use crate::ports::{DocumentExporter, ExportError, ExportFormat, ExportedDocument};

const SUPPORTED_FORMATS: &[ExportFormat] = &[ExportFormat::Json, ExportFormat::Yaml];

/// Exporter backed by `serde_json` and `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeDocumentExporter;

impl SerdeDocumentExporter {
    pub fn new() -> Self {
        Self
    }

    fn encode(document: &ExportDocument, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        match format {
            ExportFormat::Json => serde_json::to_vec_pretty(document)
                .map_err(|e| ExportError::Encoding(e.to_string())),
            ExportFormat::Yaml => serde_yaml::to_string(document)
                .map(String::into_bytes)
                .map_err(|e| ExportError::Encoding(e.to_string())),
        }
    }
}

impl DocumentExporter for SerdeDocumentExporter {
    fn export(
        &self,
        document: &ExportDocument,
        format: ExportFormat,
    ) -> Result<ExportedDocument, ExportError> {
        let content = Self::encode(document, format)?;
        let base_filename = format!(
            "{}-{}",
            document.file_stem(),
            document.exported_at().as_unix_secs()
        );
        tracing::debug!(
            filename = %base_filename,
            format = %format,
            bytes = content.len(),
            "Rendered export document"
        );
        Ok(ExportedDocument::new(content, format, &base_filename))
    }

    fn supported_formats(&self) -> &[ExportFormat] {
        SUPPORTED_FORMATS
    }
}
