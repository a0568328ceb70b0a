//! Scenario store configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::scenario::{ScenarioStore, MAX_SCENARIOS};

/// Scenario store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Scenarios kept per planning session
    #[serde(default = "default_max_scenarios")]
    pub max_scenarios: usize,
}

impl ScenarioConfig {
    /// Create an empty store with the configured limit
    pub fn new_store(&self) -> ScenarioStore {
        ScenarioStore::with_capacity(self.max_scenarios)
    }

    /// Validate scenario configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_scenarios == 0 || self.max_scenarios > MAX_SCENARIOS {
            return Err(ValidationError::InvalidScenarioLimit {
                max: MAX_SCENARIOS,
                actual: self.max_scenarios,
            });
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            max_scenarios: default_max_scenarios(),
        }
    }
}

fn default_max_scenarios() -> usize {
    MAX_SCENARIOS
}
