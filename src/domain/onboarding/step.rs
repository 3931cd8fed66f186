//! Step sequence and the clamped step index.
//!
//! # Step Order
//!
//! 1. Welcome → 2. PersonalInfo → 3. LanguageBackground → 4. TargetLanguage →
//! 5. SkillAssessment → 6. DiagnosticQuiz → 7. LearningGoals → 8. Motivation →
//! 9. TimeCommitment → 10. LearningStyle → 11. ContentPreferences →
//! 12. TopicsOfInterest → 13. CognitiveProfile → 14. LearningChallenges →
//! 15. Personality → 16. StudyEnvironment → 17. Gamification →
//! 18. FeedbackPreferences → 19. AdaptiveSettings → 20. Summary

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Percentage, ValidationError};

/// One screen of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    PersonalInfo,
    LanguageBackground,
    TargetLanguage,
    SkillAssessment,
    DiagnosticQuiz,
    LearningGoals,
    Motivation,
    TimeCommitment,
    LearningStyle,
    ContentPreferences,
    TopicsOfInterest,
    CognitiveProfile,
    LearningChallenges,
    Personality,
    StudyEnvironment,
    Gamification,
    FeedbackPreferences,
    AdaptiveSettings,
    Summary,
}

impl OnboardingStep {
    /// The canonical order of steps.
    pub const ORDER: [OnboardingStep; 20] = [
        OnboardingStep::Welcome,
        OnboardingStep::PersonalInfo,
        OnboardingStep::LanguageBackground,
        OnboardingStep::TargetLanguage,
        OnboardingStep::SkillAssessment,
        OnboardingStep::DiagnosticQuiz,
        OnboardingStep::LearningGoals,
        OnboardingStep::Motivation,
        OnboardingStep::TimeCommitment,
        OnboardingStep::LearningStyle,
        OnboardingStep::ContentPreferences,
        OnboardingStep::TopicsOfInterest,
        OnboardingStep::CognitiveProfile,
        OnboardingStep::LearningChallenges,
        OnboardingStep::Personality,
        OnboardingStep::StudyEnvironment,
        OnboardingStep::Gamification,
        OnboardingStep::FeedbackPreferences,
        OnboardingStep::AdaptiveSettings,
        OnboardingStep::Summary,
    ];

    /// Number of steps in the full sequence.
    pub const COUNT: u8 = 20;

    /// Returns the step at a 1-based position.
    pub fn at(position: u8) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|idx| Self::ORDER.get(idx as usize))
            .copied()
    }

    /// Returns the 1-based position of this step.
    pub fn position(&self) -> u8 {
        Self::ORDER
            .iter()
            .position(|s| s == self)
            .map(|idx| idx as u8 + 1)
            .unwrap_or(1)
    }

    /// Screen title.
    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome",
            OnboardingStep::PersonalInfo => "About you",
            OnboardingStep::LanguageBackground => "Your languages",
            OnboardingStep::TargetLanguage => "What do you want to learn?",
            OnboardingStep::SkillAssessment => "Rate your skills",
            OnboardingStep::DiagnosticQuiz => "Quick placement quiz",
            OnboardingStep::LearningGoals => "Your goals",
            OnboardingStep::Motivation => "Motivation",
            OnboardingStep::TimeCommitment => "Time commitment",
            OnboardingStep::LearningStyle => "How you learn best",
            OnboardingStep::ContentPreferences => "Content you enjoy",
            OnboardingStep::TopicsOfInterest => "Topics of interest",
            OnboardingStep::CognitiveProfile => "Learning habits",
            OnboardingStep::LearningChallenges => "Challenges",
            OnboardingStep::Personality => "Personality",
            OnboardingStep::StudyEnvironment => "Study environment",
            OnboardingStep::Gamification => "Games and rewards",
            OnboardingStep::FeedbackPreferences => "Feedback",
            OnboardingStep::AdaptiveSettings => "Adaptive settings",
            OnboardingStep::Summary => "Summary",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Current position in a flow of `total` steps, always within `[1, total]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepIndex {
    current: u8,
    total: u8,
}

impl StepIndex {
    /// Starts a flow of `total` steps at step 1.
    pub fn start(total: u8) -> Result<Self, ValidationError> {
        Self::at(1, total)
    }

    /// Step 1 of the standard 20-screen flow.
    pub const fn first_of_standard_flow() -> Self {
        Self {
            current: 1,
            total: OnboardingStep::COUNT,
        }
    }

    /// Positions a flow of `total` steps at `current`.
    pub fn at(current: u8, total: u8) -> Result<Self, ValidationError> {
        if total == 0 {
            return Err(ValidationError::out_of_range("total_steps", 1, u8::MAX as i32, 0));
        }
        if current == 0 || current > total {
            return Err(ValidationError::out_of_range(
                "current_step",
                1,
                total as i32,
                current as i32,
            ));
        }
        Ok(Self { current, total })
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// One step forward, or `None` at the last step.
    pub fn next(&self) -> Option<Self> {
        (!self.is_last()).then(|| Self {
            current: self.current + 1,
            total: self.total,
        })
    }

    /// One step back, or `None` at step 1.
    pub fn previous(&self) -> Option<Self> {
        (!self.is_first()).then(|| Self {
            current: self.current - 1,
            total: self.total,
        })
    }

    /// `round(current / total * 100)`.
    pub fn completion(&self) -> Percentage {
        Percentage::from_ratio(self.current as usize, self.total as usize)
    }

    /// The screen at the current position, if the flow uses the standard sequence.
    pub fn step(&self) -> Option<OnboardingStep> {
        OnboardingStep::at(self.current)
    }
}
