//! Onboarding domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, EventEnvelope, EventId, OnboardingId, Percentage, SerializableDomainEvent,
    Timestamp,
};
use crate::domain::profile::{SkillArea, TimeToGoal};

/// Published when a patch changed the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdated {
    pub event_id: EventId,
    pub onboarding_id: OnboardingId,
    /// Dotted paths of the keys the patch carried.
    pub changed_fields: Vec<String>,
    pub profile_completeness: Percentage,
    pub updated_at: Timestamp,
}

domain_event!(
    ProfileUpdated,
    event_type = "onboarding.profile_updated.v1",
    schema_version = 1,
    aggregate_id = onboarding_id,
    aggregate_type = "Onboarding",
    occurred_at = updated_at,
    event_id = event_id
);

/// Published when the learner moved forward or back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepChanged {
    pub event_id: EventId,
    pub onboarding_id: OnboardingId,
    pub from_step: u8,
    pub to_step: u8,
    pub completion_percentage: Percentage,
    pub changed_at: Timestamp,
}

domain_event!(
    StepChanged,
    event_type = "onboarding.step_changed.v1",
    schema_version = 1,
    aggregate_id = onboarding_id,
    aggregate_type = "Onboarding",
    occurred_at = changed_at,
    event_id = event_id
);

/// Published when a recommendation batch landed on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsGenerated {
    pub event_id: EventId,
    pub onboarding_id: OnboardingId,
    /// Step whose arrival requested the batch.
    pub step: u8,
    pub suggestions: Vec<String>,
    pub generated_at: Timestamp,
}

domain_event!(
    RecommendationsGenerated,
    event_type = "onboarding.recommendations_generated.v1",
    schema_version = 1,
    aggregate_id = onboarding_id,
    aggregate_type = "Onboarding",
    occurred_at = generated_at,
    event_id = event_id
);

/// Published once, when the flow completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingCompleted {
    pub event_id: EventId,
    pub onboarding_id: OnboardingId,
    pub profile_completeness: Percentage,
    pub skill_gaps: Vec<SkillArea>,
    pub strength_areas: Vec<SkillArea>,
    pub estimated_time_to_goal: TimeToGoal,
    pub completed_at: Timestamp,
}

domain_event!(
    OnboardingCompleted,
    event_type = "onboarding.completed.v1",
    schema_version = 1,
    aggregate_id = onboarding_id,
    aggregate_type = "Onboarding",
    occurred_at = completed_at,
    event_id = event_id
);

/// Any event the onboarding reducer can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingEvent {
    ProfileUpdated(ProfileUpdated),
    StepChanged(StepChanged),
    RecommendationsGenerated(RecommendationsGenerated),
    Completed(OnboardingCompleted),
}

impl OnboardingEvent {
    /// Wraps the event for transport.
    pub fn to_envelope(&self) -> EventEnvelope {
        match self {
            OnboardingEvent::ProfileUpdated(e) => e.to_envelope(),
            OnboardingEvent::StepChanged(e) => e.to_envelope(),
            OnboardingEvent::RecommendationsGenerated(e) => e.to_envelope(),
            OnboardingEvent::Completed(e) => e.to_envelope(),
        }
    }
}
