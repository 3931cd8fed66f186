//! RecommendationProvider port - asynchronous source of suggestion batches.
//!
//! The flow asks for a batch when the learner reaches a checkpoint step and
//! keeps going; the batch lands on the profile whenever the provider answers.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::OnboardingId;
use crate::domain::profile::UserProfile;

/// Input for one recommendation batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub onboarding_id: OnboardingId,
    /// Step whose arrival triggered the request.
    pub step: u8,
    /// Profile snapshot taken when the request was issued.
    pub profile: UserProfile,
}

/// Errors a provider may report. The flow logs and drops them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    /// Provider is switched off or unreachable.
    #[error("recommendation provider unavailable: {message}")]
    Unavailable { message: String },

    /// Any other provider failure.
    #[error("recommendation provider failed: {0}")]
    Internal(String),
}

/// Port for producing recommendation batches.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Returns zero or more suggestion strings for the given profile snapshot.
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<Vec<String>, RecommendationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn RecommendationProvider) {}

    #[test]
    fn errors_render_readable_messages() {
        let err = RecommendationError::Internal("catalog missing".into());
        assert_eq!(err.to_string(), "recommendation provider failed: catalog missing");

        let err = RecommendationError::Unavailable {
            message: "disabled".into(),
        };
        assert!(err.to_string().contains("disabled"));
    }
}
