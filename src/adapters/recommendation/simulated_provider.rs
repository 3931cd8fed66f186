//! Simulated recommendation provider.
//!
//! Stands in for a remote recommendation service: waits a fixed latency, then
//! evaluates the rule catalog against the profile snapshot.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::RecommendationsConfig;
use crate::domain::onboarding::RecommendationCatalog;
use crate::ports::{RecommendationError, RecommendationProvider, RecommendationRequest};

/// Default simulated latency.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(2000);

/// Rule-catalog provider with artificial latency.
#[derive(Debug, Clone)]
pub struct SimulatedRecommendationProvider {
    catalog: RecommendationCatalog,
    delay: Duration,
    enabled: bool,
}

impl SimulatedRecommendationProvider {
    /// Creates a provider over `catalog` with the default latency.
    pub fn new(catalog: RecommendationCatalog) -> Self {
        Self {
            catalog,
            delay: DEFAULT_SIMULATED_DELAY,
            enabled: true,
        }
    }

    /// Builds the provider described by the recommendations config section.
    pub fn from_config(config: &RecommendationsConfig) -> Self {
        Self {
            catalog: config.catalog(),
            delay: config.simulated_delay(),
            enabled: config.enabled,
        }
    }

    /// Overrides the simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Switches the provider off; every request then fails as unavailable.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedRecommendationProvider {
    fn default() -> Self {
        Self::new(RecommendationCatalog::default())
    }
}

#[async_trait]
impl RecommendationProvider for SimulatedRecommendationProvider {
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<Vec<String>, RecommendationError> {
        if !self.enabled {
            return Err(RecommendationError::Unavailable {
                message: "recommendations are disabled".to_string(),
            });
        }

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let suggestions = self.catalog.evaluate(&request.profile);
        tracing::debug!(
            onboarding_id = %request.onboarding_id,
            step = request.step,
            count = suggestions.len(),
            "Simulated recommendations evaluated"
        );
        Ok(suggestions)
    }
}
