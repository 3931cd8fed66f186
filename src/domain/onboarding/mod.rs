//! Onboarding module - the 20-step flow and everything derived from it.
//!
//! # Module Structure
//!
//! - `step` - Screen sequence and the clamped step index
//! - `gate` - Per-step required-field checks
//! - `diagnostic` - Placement quiz with local answer state
//! - `completeness` - Critical-field table and completeness score
//! - `recommendation` - Declarative rule catalog
//! - `summary` - Analytics computed at completion
//! - `rules` - Tunable flow tables
//! - `state` / `action` / `events` / `reducer` - The pure state transition

mod action;
mod completeness;
mod diagnostic;
mod events;
mod gate;
mod recommendation;
mod reducer;
mod rules;
mod state;
mod step;
mod summary;

pub use action::{Effect, OnboardingAction};
pub use completeness::{CriticalField, CriticalFieldTable};
pub use diagnostic::{placement_for, DiagnosticQuiz, QuizQuestion, POINTS_PER_QUESTION, QUESTIONS};
pub use events::{
    OnboardingCompleted, OnboardingEvent, ProfileUpdated, RecommendationsGenerated, StepChanged,
};
pub use gate::{MissingField, StepGate};
pub use recommendation::{RecommendationCatalog, RecommendationRule, RuleCondition};
pub use reducer::{reduce, Transition};
pub use rules::{FlowRules, DEFAULT_TRIGGER_STEPS};
pub use state::OnboardingState;
pub use step::{OnboardingStep, StepIndex};
pub use summary::{
    estimate_time_to_goal, recommended_courses, skill_gaps, strength_areas, summarize,
    CompletionSummary, GAP_THRESHOLD, HOURS_PER_LEVEL_POINT, STRENGTH_THRESHOLD,
};
