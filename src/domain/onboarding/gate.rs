//! Per-step "continue" gates.
//!
//! Each step checks its own required fields before the user may move on.
//! Gates are advisory: the reducer never consults them.

use serde::Serialize;

use super::OnboardingStep;
use crate::domain::profile::UserProfile;

/// A required field the current step is still missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingField {
    pub field: &'static str,
    /// Inline hint shown next to the disabled continue control.
    pub hint: &'static str,
}

/// Result of checking a step's required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepGate {
    pub step: OnboardingStep,
    pub missing: Vec<MissingField>,
}

impl StepGate {
    /// True when the continue control should be enabled.
    pub fn can_continue(&self) -> bool {
        self.missing.is_empty()
    }

    /// Hints for every missing field, in declaration order.
    pub fn hints(&self) -> Vec<&'static str> {
        self.missing.iter().map(|m| m.hint).collect()
    }
}

fn text_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn require(missing: &mut Vec<MissingField>, ok: bool, field: &'static str, hint: &'static str) {
    if !ok {
        missing.push(MissingField { field, hint });
    }
}

impl OnboardingStep {
    /// Checks this step's required fields against the profile.
    pub fn gate(&self, profile: &UserProfile) -> StepGate {
        let mut missing = Vec::new();
        let identity = profile.identity();
        let language = profile.language();
        let goals = profile.goals();
        let prefs = profile.preferences();

        match self {
            OnboardingStep::PersonalInfo => {
                require(
                    &mut missing,
                    text_present(&identity.first_name),
                    "identity.first_name",
                    "Tell us your first name",
                );
                require(
                    &mut missing,
                    identity.email.as_deref().is_some_and(|e| e.contains('@')),
                    "identity.email",
                    "Enter a valid email address",
                );
                require(
                    &mut missing,
                    identity.age_range.is_some(),
                    "identity.age_range",
                    "Pick your age range",
                );
            }
            OnboardingStep::LanguageBackground => require(
                &mut missing,
                text_present(&language.native_language),
                "language.native_language",
                "Select your native language",
            ),
            OnboardingStep::TargetLanguage => require(
                &mut missing,
                text_present(&language.target_language),
                "language.target_language",
                "Choose the language you want to learn",
            ),
            OnboardingStep::DiagnosticQuiz => require(
                &mut missing,
                profile.diagnostic().is_some(),
                "diagnostic",
                "Finish the quiz to continue",
            ),
            OnboardingStep::LearningGoals => {
                require(
                    &mut missing,
                    !goals.primary_goals.is_empty(),
                    "goals.primary_goals",
                    "Select at least one goal",
                );
                require(
                    &mut missing,
                    goals.target_level.is_some(),
                    "goals.target_level",
                    "Pick the level you are aiming for",
                );
            }
            OnboardingStep::TimeCommitment => {
                require(
                    &mut missing,
                    goals.daily_minutes.is_some_and(|m| m > 0),
                    "goals.daily_minutes",
                    "How many minutes a day can you study?",
                );
                require(
                    &mut missing,
                    goals.timeframe_months.is_some_and(|m| m > 0),
                    "goals.timeframe_months",
                    "Choose a timeframe",
                );
            }
            OnboardingStep::LearningStyle => require(
                &mut missing,
                !prefs.learning_styles.is_empty(),
                "preferences.learning_styles",
                "Select at least one learning style",
            ),
            OnboardingStep::ContentPreferences => require(
                &mut missing,
                !prefs.content_types.is_empty(),
                "preferences.content_types",
                "Select the content you enjoy",
            ),
            OnboardingStep::TopicsOfInterest => require(
                &mut missing,
                !prefs.topics_of_interest.is_empty(),
                "preferences.topics_of_interest",
                "Pick a few topics",
            ),
            OnboardingStep::Gamification => require(
                &mut missing,
                prefs.gamification_level.is_some(),
                "preferences.gamification_level",
                "Choose how much gamification you want",
            ),
            OnboardingStep::FeedbackPreferences => require(
                &mut missing,
                prefs.feedback_style.is_some(),
                "preferences.feedback_style",
                "Choose a feedback style",
            ),
            // Sliders with defaults and optional lists.
            OnboardingStep::Welcome
            | OnboardingStep::SkillAssessment
            | OnboardingStep::Motivation
            | OnboardingStep::CognitiveProfile
            | OnboardingStep::LearningChallenges
            | OnboardingStep::Personality
            | OnboardingStep::StudyEnvironment
            | OnboardingStep::AdaptiveSettings
            | OnboardingStep::Summary => {}
        }

        StepGate {
            step: *self,
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{AgeRange, IdentityPatch, ProfilePatch};

    #[test]
    fn welcome_always_passes() {
        let gate = OnboardingStep::Welcome.gate(&UserProfile::new());
        assert!(gate.can_continue());
    }

    #[test]
    fn personal_info_lists_every_missing_field() {
        let gate = OnboardingStep::PersonalInfo.gate(&UserProfile::new());
        assert!(!gate.can_continue());
        let fields: Vec<_> = gate.missing.iter().map(|m| m.field).collect();
        assert_eq!(
            fields,
            vec!["identity.first_name", "identity.email", "identity.age_range"]
        );
    }

    #[test]
    fn personal_info_passes_once_filled() {
        let mut profile = UserProfile::new();
        profile.apply_patch(&ProfilePatch::identity(
            IdentityPatch::default()
                .first_name(Some("Ana".into()))
                .email(Some("ana@example.com".into()))
                .age_range(Some(AgeRange::From25To34)),
        ));
        assert!(OnboardingStep::PersonalInfo.gate(&profile).can_continue());
    }

    #[test]
    fn blank_name_does_not_count() {
        let mut profile = UserProfile::new();
        profile.apply_patch(&ProfilePatch::identity(
            IdentityPatch::default().first_name(Some("   ".into())),
        ));
        let gate = OnboardingStep::PersonalInfo.gate(&profile);
        assert!(gate.hints().contains(&"Tell us your first name"));
    }

    #[test]
    fn diagnostic_step_requires_quiz_result() {
        let gate = OnboardingStep::DiagnosticQuiz.gate(&UserProfile::new());
        assert_eq!(gate.hints(), vec!["Finish the quiz to continue"]);
    }
}
