//! Pricing configuration

use serde::Deserialize;
use std::sync::Arc;

use super::error::{ConfigError, ValidationError};
use crate::domain::pricing::{CostCalculator, PricingRuleTable};

/// Pricing configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingConfig {
    /// YAML file with a versioned rule table; the built-in table when unset
    pub rule_table_path: Option<String>,
}

impl PricingConfig {
    /// Load the configured rule table
    pub fn load_rule_table(&self) -> Result<Arc<PricingRuleTable>, ConfigError> {
        match &self.rule_table_path {
            Some(path) => Ok(Arc::new(PricingRuleTable::from_yaml_file(path)?)),
            None => Ok(PricingRuleTable::standard()),
        }
    }

    /// Build a calculator over the configured rule table
    pub fn calculator(&self) -> Result<CostCalculator, ConfigError> {
        Ok(CostCalculator::new(self.load_rule_table()?))
    }

    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self
            .rule_table_path
            .as_ref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ValidationError::EmptyRuleTablePath);
        }
        Ok(())
    }
}
