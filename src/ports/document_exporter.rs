//! Document Exporter Port - Rendering export documents to bytes.
//!
//! The domain builds [`ExportDocument`] values; an exporter turns them into
//! file content. Delivering the bytes (download, email) stays outside the
//! engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::export::ExportDocument;
use crate::domain::foundation::ErrorCode;

/// Port for rendering export documents.
///
/// # Contract
///
/// Implementations must:
/// - Preserve every field of the document
/// - Report unsupported formats instead of guessing
pub trait DocumentExporter: Send + Sync {
    /// Render a document in the requested format.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the format is unsupported or encoding fails.
    fn export(
        &self,
        document: &ExportDocument,
        format: ExportFormat,
    ) -> Result<ExportedDocument, ExportError>;

    /// Formats this exporter can produce.
    fn supported_formats(&self) -> &[ExportFormat];
}

/// Export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Yaml => "application/yaml",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }

    /// Content as UTF-8 text, if it is valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// Errors that can occur while exporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to encode document: {0}")]
    Encoding(String),
}

impl ExportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExportError::UnsupportedFormat(_) => ErrorCode::ValidationFailed,
            ExportError::Encoding(_) => ErrorCode::ExportFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_exporter_is_object_safe() {
        fn _accepts_dyn(_exporter: &dyn DocumentExporter) {}
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn exported_document_builds_filename_and_type() {
        let doc = ExportedDocument::new(b"{}".to_vec(), ExportFormat::Json, "event-budget-1");
        assert_eq!(doc.filename, "event-budget-1.json");
        assert_eq!(doc.content_type, "application/json");
        assert_eq!(doc.as_text(), Some("{}"));
    }

    #[test]
    fn format_defaults_to_json() {
        assert_eq!(ExportFormat::default(), ExportFormat::Json);
        assert_eq!(ExportFormat::Yaml.to_string(), "yaml");
    }
}
