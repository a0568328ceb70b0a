//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EVENT_BUDGET` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working setup
//! with the built-in rate sheet.
//!
//! # Example
//!
//! ```no_run
//! use event_budget::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.telemetry).expect("Failed to install tracing");
//!
//! let calculator = config.pricing.calculator().expect("Failed to load rule table");
//! ```

mod error;
mod export;
mod pricing;
mod scenarios;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use pricing::PricingConfig;
pub use scenarios::ScenarioConfig;
pub use telemetry::{init_tracing, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rule table selection
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Scenario store limits
    #[serde(default)]
    pub scenarios: ScenarioConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EVENT_BUDGET` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EVENT_BUDGET__SCENARIOS__MAX_SCENARIOS=3` -> `scenarios.max_scenarios = 3`
    /// - `EVENT_BUDGET__PRICING__RULE_TABLE_PATH=...` -> `pricing.rule_table_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EVENT_BUDGET")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pricing.validate()?;
        self.scenarios.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
