//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScenarioRepository` - Keeps each planning session's scenario store
//! - `DocumentExporter` - Renders export documents into file content

mod document_exporter;
mod scenario_repository;

pub use document_exporter::{DocumentExporter, ExportError, ExportFormat, ExportedDocument};
pub use scenario_repository::{RepositoryError, ScenarioRepository};
