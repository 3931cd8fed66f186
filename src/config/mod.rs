//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and an optional config file using the `config` and `dotenvy` crates.
//! Environment variables use the `ONBOARDING` prefix and nested values use
//! double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use onboarding_wizard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Wizard has {} steps", config.wizard.total_steps);
//! ```

mod error;
mod recommendations;
mod telemetry;
mod wizard;

pub use error::{ConfigError, ValidationError};
pub use recommendations::RecommendationsConfig;
pub use telemetry::TelemetryConfig;
pub use wizard::WizardConfig;

use serde::Deserialize;
use std::path::Path;

use crate::domain::onboarding::FlowRules;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "ONBOARDING";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields the standard
/// 20-step flow with the simulated provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Step count, recommendation checkpoints, critical fields
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Recommendation provider settings
    #[serde(default)]
    pub recommendations: RecommendationsConfig,

    /// Log filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ONBOARDING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ONBOARDING__WIZARD__TOTAL_STEPS=12` -> `wizard.total_steps = 12`
    /// - `ONBOARDING__WIZARD__RECOMMENDATION_TRIGGER_STEPS=4,8` -> `[4, 8]`
    /// - `ONBOARDING__TELEMETRY__LOG_LEVEL=debug` -> `telemetry.log_level = "debug"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an optional file, overridden by environment variables
    ///
    /// The file format (YAML, TOML, JSON) is chosen by extension.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("wizard.recommendation_trigger_steps")
                    .with_list_parse_key("wizard.critical_fields"),
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
        self.wizard.validate()?;
        self.recommendations.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }

    /// Flow rules for the onboarding reducer
    pub fn flow_rules(&self) -> Result<FlowRules, ValidationError> {
        self.wizard.flow_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("ONBOARDING__WIZARD__TOTAL_STEPS");
        env::remove_var("ONBOARDING__WIZARD__RECOMMENDATION_TRIGGER_STEPS");
        env::remove_var("ONBOARDING__RECOMMENDATIONS__ENABLED");
        env::remove_var("ONBOARDING__RECOMMENDATIONS__SIMULATED_DELAY_MS");
        env::remove_var("ONBOARDING__TELEMETRY__LOG_LEVEL");
    }

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.wizard.total_steps, 20);
        assert_eq!(config.recommendations.simulated_delay_ms, 2000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ONBOARDING__WIZARD__TOTAL_STEPS", "12");
        env::set_var("ONBOARDING__WIZARD__RECOMMENDATION_TRIGGER_STEPS", "4,8");
        env::set_var("ONBOARDING__RECOMMENDATIONS__ENABLED", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.wizard.total_steps, 12);
        assert_eq!(config.wizard.recommendation_trigger_steps, vec![4, 8]);
        assert!(!config.recommendations.enabled);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = yaml_file(
            "wizard:\n  total_steps: 10\n  recommendation_trigger_steps: [3]\n  critical_fields: [first_name, email]\nrecommendations:\n  simulated_delay_ms: 50\n",
        );

        let config = AppConfig::load_from(Some(file.path())).unwrap();

        assert_eq!(config.wizard.total_steps, 10);
        assert_eq!(config.wizard.critical_fields.len(), 2);
        assert_eq!(config.recommendations.simulated_delay_ms, 50);
        let rules = config.flow_rules().unwrap();
        assert!(rules.triggers_recommendations(3));
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let file = yaml_file("telemetry:\n  log_level: warn\n");
        env::set_var("ONBOARDING__TELEMETRY__LOG_LEVEL", "debug");
        let result = AppConfig::load_from(Some(file.path()));
        clear_env();

        assert_eq!(result.unwrap().telemetry.log_level, "debug");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load_from(Some(Path::new("/nonexistent/onboarding.yaml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_trigger() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let file = yaml_file("wizard:\n  total_steps: 5\n  recommendation_trigger_steps: [6]\n");
        clear_env();

        let config = AppConfig::load_from(Some(file.path())).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ValidationError::TriggerStepOutOfRange { step: 6, total_steps: 5 })
        ));
    }
}
