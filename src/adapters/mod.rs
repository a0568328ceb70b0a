//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Scenario store persistence (in-memory)
//! - `document` - Export document rendering (JSON, YAML)

pub mod document;
pub mod storage;

pub use document::SerdeDocumentExporter;
pub use storage::InMemoryScenarioRepository;
