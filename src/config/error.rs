//! Configuration error types

use thiserror::Error;

use crate::domain::pricing::RuleTableError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Pricing rule table unavailable: {0}")]
    RuleTable(#[from] RuleTableError),

    #[error("Tracing setup failed: {0}")]
    Telemetry(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Rule table path cannot be empty when set")]
    EmptyRuleTablePath,

    #[error("Scenario limit must be between 1 and {max}, got {actual}")]
    InvalidScenarioLimit { max: usize, actual: usize },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
