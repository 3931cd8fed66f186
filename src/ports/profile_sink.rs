//! ProfileSink port - exit collaborator for the completed profile.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OnboardingId};
use crate::domain::profile::UserProfile;

/// Receives the profile once onboarding completes.
///
/// This is the boundary where a real deployment would submit the profile to
/// a backend. Errors propagate to the caller of `complete()`.
#[async_trait]
pub trait ProfileSink: Send + Sync {
    async fn submit(
        &self,
        onboarding_id: OnboardingId,
        profile: &UserProfile,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ProfileSink) {}
}
