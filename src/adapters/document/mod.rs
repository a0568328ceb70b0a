//! Document Adapters
//!
//! Implementations of the DocumentExporter port.
//!
//! - **SerdeDocumentExporter** - JSON and YAML rendering via serde

mod serde_document_exporter;

pub use serde_document_exporter::SerdeDocumentExporter;
