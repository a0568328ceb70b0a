//! Storage Adapters
//!
//! Implementations of the ScenarioRepository port.
//!
//! - **InMemoryScenarioRepository** - Keeps stores in process memory

mod in_memory_scenario_repository;

pub use in_memory_scenario_repository::InMemoryScenarioRepository;
