//! In-memory profile sink that keeps every submission.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, OnboardingId};
use crate::domain::profile::UserProfile;
use crate::ports::ProfileSink;

/// Captures submitted profiles for inspection.
#[derive(Debug, Default)]
pub struct InMemoryProfileSink {
    submitted: RwLock<Vec<(OnboardingId, UserProfile)>>,
    fail_with: Option<String>,
}

impl InMemoryProfileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that rejects every submission with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            submitted: RwLock::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// All submissions in arrival order.
    pub fn submitted(&self) -> Vec<(OnboardingId, UserProfile)> {
        self.submitted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent submitted profile.
    pub fn last_profile(&self) -> Option<UserProfile> {
        self.submitted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .map(|(_, profile)| profile.clone())
    }

    pub fn count(&self) -> usize {
        self.submitted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl ProfileSink for InMemoryProfileSink {
    async fn submit(
        &self,
        onboarding_id: OnboardingId,
        profile: &UserProfile,
    ) -> Result<(), DomainError> {
        if let Some(message) = &self.fail_with {
            return Err(DomainError::new(ErrorCode::ProfileSinkError, message.clone())
                .with_detail("onboarding_id", onboarding_id.to_string()));
        }
        self.submitted
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((onboarding_id, profile.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_submissions_in_order() {
        let sink = InMemoryProfileSink::new();
        let first = OnboardingId::new();
        let second = OnboardingId::new();

        sink.submit(first, &UserProfile::new()).await.unwrap();
        sink.submit(second, &UserProfile::new()).await.unwrap();

        let ids: Vec<OnboardingId> = sink.submitted().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![first, second]);
        assert!(sink.last_profile().is_some());
    }

    #[tokio::test]
    async fn failing_sink_reports_sink_error() {
        let sink = InMemoryProfileSink::failing("backend offline");

        let err = sink.submit(OnboardingId::new(), &UserProfile::new()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ProfileSinkError);
        assert_eq!(sink.count(), 0);
    }
}
