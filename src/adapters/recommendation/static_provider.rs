//! Static recommendation provider for tests.
//!
//! Returns a fixed batch (or a fixed error), optionally after a delay, and
//! records every request for verification.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{RecommendationError, RecommendationProvider, RecommendationRequest};

/// Deterministic provider with call tracking.
///
/// # Example
///
/// ```ignore
/// let provider = StaticRecommendationProvider::new(vec!["Practice daily".into()]);
/// let batch = provider.recommend(request).await?;
/// assert_eq!(provider.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StaticRecommendationProvider {
    outcome: Result<Vec<String>, RecommendationError>,
    delay: Duration,
    calls: Arc<Mutex<Vec<RecommendationRequest>>>,
}

impl StaticRecommendationProvider {
    /// Always answers with `suggestions`.
    pub fn new(suggestions: Vec<String>) -> Self {
        Self {
            outcome: Ok(suggestions),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fails with `error`.
    pub fn failing(error: RecommendationError) -> Self {
        Self {
            outcome: Err(error),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds simulated latency before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<RecommendationRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl RecommendationProvider for StaticRecommendationProvider {
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<Vec<String>, RecommendationError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OnboardingId;
    use crate::domain::profile::UserProfile;

    fn request(step: u8) -> RecommendationRequest {
        RecommendationRequest {
            onboarding_id: OnboardingId::new(),
            step,
            profile: UserProfile::new(),
        }
    }

    #[tokio::test]
    async fn returns_fixed_batch_and_tracks_calls() {
        let provider = StaticRecommendationProvider::new(vec!["A".into(), "B".into()]);

        let batch = provider.recommend(request(5)).await.unwrap();
        provider.recommend(request(10)).await.unwrap();

        assert_eq!(batch, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.calls()[1].step, 10);
    }

    #[tokio::test]
    async fn failing_provider_returns_error() {
        let provider = StaticRecommendationProvider::failing(RecommendationError::Internal(
            "boom".into(),
        ));
        let err = provider.recommend(request(5)).await.unwrap_err();
        assert_eq!(err, RecommendationError::Internal("boom".into()));
    }

    #[tokio::test]
    async fn clones_share_call_history() {
        let provider = StaticRecommendationProvider::new(vec![]);
        let clone = provider.clone();

        clone.recommend(request(15)).await.unwrap();

        assert_eq!(provider.call_count(), 1);
    }
}
