//! Export configuration

use serde::Deserialize;

use crate::ports::ExportFormat;

/// Export configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Format used when a caller does not ask for one
    #[serde(default)]
    pub default_format: ExportFormat,
}
