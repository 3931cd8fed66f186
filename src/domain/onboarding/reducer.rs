//! The onboarding reducer.
//!
//! `reduce` is pure: it never performs I/O and never fails. Work that needs
//! the outside world comes back as [`Effect`]s for the controller to run.

use super::{
    summarize, Effect, FlowRules, OnboardingAction, OnboardingCompleted, OnboardingEvent,
    OnboardingState, ProfileUpdated, RecommendationsGenerated, StepChanged, StepIndex,
};
use crate::domain::foundation::{EventId, Timestamp};
use crate::domain::profile::ProfilePatch;

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: OnboardingState,
    pub effects: Vec<Effect>,
    pub events: Vec<OnboardingEvent>,
}

impl Transition {
    fn unchanged(state: &OnboardingState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
            events: Vec::new(),
        }
    }

    fn with_event(state: OnboardingState, event: OnboardingEvent) -> Self {
        Self {
            state,
            effects: Vec::new(),
            events: vec![event],
        }
    }

    /// Returns true when the action changed nothing observable.
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty() && self.events.is_empty()
    }
}

/// Applies `action` to `state` under `rules`.
///
/// Once the run is completed, every action except the settling of outstanding
/// recommendation requests is a no-op.
pub fn reduce(state: &OnboardingState, action: OnboardingAction, rules: &FlowRules) -> Transition {
    match action {
        OnboardingAction::RecommendationsReady { step, suggestions } => {
            recommendations_ready(state, step, suggestions)
        }
        OnboardingAction::RecommendationsFailed { .. } => {
            let mut next = state.clone();
            next.request_settled();
            Transition {
                state: next,
                effects: Vec::new(),
                events: Vec::new(),
            }
        }
        _ if state.is_completed() => Transition::unchanged(state),
        OnboardingAction::UpdateProfile(patch) => update_profile(state, &patch, rules),
        OnboardingAction::Next => match state.step().next() {
            Some(target) => move_to(state, target, rules),
            None => Transition::unchanged(state),
        },
        OnboardingAction::Back => match state.step().previous() {
            Some(target) => move_to(state, target, rules),
            None => Transition::unchanged(state),
        },
        OnboardingAction::Complete => complete(state, rules),
    }
}

fn update_profile(state: &OnboardingState, patch: &ProfilePatch, rules: &FlowRules) -> Transition {
    if patch.is_empty() {
        return Transition::unchanged(state);
    }

    let mut next = state.clone();
    next.profile_mut().apply_patch(patch);
    next.recompute(rules);

    let event = ProfileUpdated {
        event_id: EventId::new(),
        onboarding_id: next.id(),
        changed_fields: patch.changed_fields(),
        profile_completeness: next.profile().analytics().profile_completeness,
        updated_at: Timestamp::now(),
    };
    Transition::with_event(next, OnboardingEvent::ProfileUpdated(event))
}

fn move_to(state: &OnboardingState, target: StepIndex, rules: &FlowRules) -> Transition {
    let from_step = state.step().current();
    let mut next = state.clone();
    next.set_step(target);
    next.recompute(rules);

    let event_id = EventId::new();
    let mut effects = Vec::new();
    let moved_forward = target.current() > from_step;
    if moved_forward && rules.triggers_recommendations(target.current()) {
        next.request_issued(target.current());
        effects.push(Effect::RequestRecommendations {
            onboarding_id: next.id(),
            step: target.current(),
            profile: next.profile().clone(),
            cause: event_id.clone(),
        });
    }

    let event = StepChanged {
        event_id,
        onboarding_id: next.id(),
        from_step,
        to_step: target.current(),
        completion_percentage: next.profile().analytics().completion_percentage,
        changed_at: Timestamp::now(),
    };
    Transition {
        state: next,
        effects,
        events: vec![OnboardingEvent::StepChanged(event)],
    }
}

fn complete(state: &OnboardingState, rules: &FlowRules) -> Transition {
    let completed_at = Timestamp::now();
    let mut next = state.clone();
    next.mark_completed(completed_at);
    next.recompute(rules);

    let summary = summarize(next.profile());
    let analytics = next.profile_mut().analytics_mut();
    analytics.skill_gaps = summary.skill_gaps.clone();
    analytics.strength_areas = summary.strength_areas.clone();
    analytics.recommended_courses = summary.recommended_courses;
    analytics.estimated_time_to_goal = Some(summary.estimated_time_to_goal);

    let event = OnboardingCompleted {
        event_id: EventId::new(),
        onboarding_id: next.id(),
        profile_completeness: next.profile().analytics().profile_completeness,
        skill_gaps: summary.skill_gaps,
        strength_areas: summary.strength_areas,
        estimated_time_to_goal: summary.estimated_time_to_goal,
        completed_at,
    };
    let effect = Effect::EmitProfile {
        onboarding_id: next.id(),
        profile: next.profile().clone(),
    };
    Transition {
        state: next,
        effects: vec![effect],
        events: vec![OnboardingEvent::Completed(event)],
    }
}

/// Applies a batch only while the run is open and the batch answers the most
/// recent request; anything else just settles the pending count.
fn recommendations_ready(
    state: &OnboardingState,
    step: u8,
    suggestions: Vec<String>,
) -> Transition {
    let mut next = state.clone();
    next.request_settled();
    let superseded = next.latest_recommendation_step() != Some(step);
    if next.is_completed() || superseded {
        return Transition {
            state: next,
            effects: Vec::new(),
            events: Vec::new(),
        };
    }

    next.profile_mut().analytics_mut().ai_recommendations = suggestions.clone();
    let event = RecommendationsGenerated {
        event_id: EventId::new(),
        onboarding_id: next.id(),
        step,
        suggestions,
        generated_at: Timestamp::now(),
    };
    Transition::with_event(next, OnboardingEvent::RecommendationsGenerated(event))
}
