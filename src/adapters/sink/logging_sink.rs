//! Logging profile sink - the default exit collaborator.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, OnboardingId};
use crate::domain::profile::UserProfile;
use crate::ports::ProfileSink;

/// Writes the completed profile to the structured log as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingProfileSink;

impl LoggingProfileSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProfileSink for LoggingProfileSink {
    async fn submit(
        &self,
        onboarding_id: OnboardingId,
        profile: &UserProfile,
    ) -> Result<(), DomainError> {
        let json = serde_json::to_string(profile).map_err(|e| {
            DomainError::new(ErrorCode::ProfileSinkError, "failed to serialize profile")
                .with_detail("cause", e.to_string())
        })?;

        tracing::info!(
            onboarding_id = %onboarding_id,
            completeness = profile.analytics().profile_completeness.value(),
            profile = %json,
            "Onboarding profile submitted"
        );
        Ok(())
    }
}
