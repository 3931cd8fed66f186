//! Recommendation provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::onboarding::{RecommendationCatalog, RecommendationRule};

const MAX_SIMULATED_DELAY_MS: u64 = 60_000;

/// Settings for the simulated recommendation provider
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsConfig {
    /// Request recommendations at trigger steps
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Artificial latency before a batch is returned
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,

    /// Replaces the built-in rule catalog when set
    #[serde(default)]
    pub rules: Option<Vec<RecommendationRule>>,
}

impl RecommendationsConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> RecommendationCatalog {
        match &self.rules {
            Some(rules) => RecommendationCatalog::new(rules.clone()),
            None => RecommendationCatalog::default(),
        }
    }

    /// Validate recommendation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.simulated_delay_ms > MAX_SIMULATED_DELAY_MS {
            return Err(ValidationError::SimulatedDelayTooLong);
        }
        if self.rules.as_ref().is_some_and(Vec::is_empty) {
            return Err(ValidationError::EmptyRuleCatalog);
        }
        Ok(())
    }
}

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            simulated_delay_ms: default_simulated_delay_ms(),
            rules: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_simulated_delay_ms() -> u64 {
    2000
}
