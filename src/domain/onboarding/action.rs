//! Actions dispatched into the onboarding reducer, and the effects it asks for.

use crate::domain::foundation::{EventId, OnboardingId};
use crate::domain::profile::{ProfilePatch, UserProfile};

/// Input to [`reduce`](super::reduce).
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingAction {
    /// Merge a partial profile update.
    UpdateProfile(ProfilePatch),
    /// Advance one step.
    Next,
    /// Go back one step.
    Back,
    /// Finish the flow and compute the summary fields.
    Complete,
    /// A recommendation batch requested at `step` arrived.
    RecommendationsReady { step: u8, suggestions: Vec<String> },
    /// The provider gave up on the batch requested at `step`.
    RecommendationsFailed { step: u8 },
}

impl OnboardingAction {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            OnboardingAction::UpdateProfile(_) => "update_profile",
            OnboardingAction::Next => "next",
            OnboardingAction::Back => "back",
            OnboardingAction::Complete => "complete",
            OnboardingAction::RecommendationsReady { .. } => "recommendations_ready",
            OnboardingAction::RecommendationsFailed { .. } => "recommendations_failed",
        }
    }
}

/// Side effect the controller must carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the recommendation provider for a batch based on this profile snapshot.
    RequestRecommendations {
        onboarding_id: OnboardingId,
        step: u8,
        profile: UserProfile,
        /// The step change that issued the request.
        cause: EventId,
    },
    /// Hand the completed profile to the exit collaborator.
    EmitProfile {
        onboarding_id: OnboardingId,
        profile: UserProfile,
    },
}
