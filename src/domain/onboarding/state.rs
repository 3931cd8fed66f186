//! OnboardingState - the single value the reducer folds actions into.

use serde::Serialize;

use super::{FlowRules, StepIndex};
use crate::domain::foundation::{OnboardingId, OnboardingStatus, Percentage, Timestamp};
use crate::domain::profile::UserProfile;

/// Everything the flow knows about one onboarding run.
///
/// # Invariants
///
/// - `step` stays within `[1, total_steps]`
/// - `profile.onboarding_step()` equals `step.current()`
/// - derived analytics match the profile inputs after every transition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingState {
    id: OnboardingId,
    profile: UserProfile,
    step: StepIndex,
    status: OnboardingStatus,
    pending_recommendations: u32,
    latest_recommendation_step: Option<u8>,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl OnboardingState {
    /// Starts a fresh run at step 1 with an empty profile.
    pub fn new(id: OnboardingId, rules: &FlowRules) -> Self {
        let mut state = Self {
            id,
            profile: UserProfile::new(),
            step: rules.first_step(),
            status: OnboardingStatus::InProgress,
            pending_recommendations: 0,
            latest_recommendation_step: None,
            started_at: Timestamp::now(),
            completed_at: None,
        };
        state.recompute(rules);
        state
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> OnboardingId {
        self.id
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn step(&self) -> StepIndex {
        self.step
    }

    pub fn status(&self) -> OnboardingStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Recommendation requests issued but not yet answered.
    pub fn pending_recommendations(&self) -> u32 {
        self.pending_recommendations
    }

    /// Trigger step of the most recent recommendation request.
    ///
    /// Only a batch answering this request is applied to the profile.
    pub fn latest_recommendation_step(&self) -> Option<u8> {
        self.latest_recommendation_step
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reducer-only mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub(super) fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    pub(super) fn set_step(&mut self, step: StepIndex) {
        self.step = step;
    }

    pub(super) fn mark_completed(&mut self, at: Timestamp) {
        self.status = OnboardingStatus::Completed;
        self.completed_at = Some(at);
    }

    pub(super) fn request_issued(&mut self, step: u8) {
        self.pending_recommendations += 1;
        self.latest_recommendation_step = Some(step);
    }

    pub(super) fn request_settled(&mut self) {
        self.pending_recommendations = self.pending_recommendations.saturating_sub(1);
    }

    /// Re-derives the step mirror, completion and completeness.
    pub(super) fn recompute(&mut self, rules: &FlowRules) {
        let completion = if self.is_completed() {
            Percentage::HUNDRED
        } else {
            self.step.completion()
        };
        let completeness = rules.critical_fields().completeness(&self.profile);

        self.profile.set_onboarding_step(self.step.current());
        let analytics = self.profile.analytics_mut();
        analytics.completion_percentage = completion;
        analytics.profile_completeness = completeness;
    }
}
