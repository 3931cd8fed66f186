//! Profile module - the learner profile and its value objects.
//!
//! The profile is namespaced into groups, each with a matching patch type:
//!
//! - **Identity** - name, contact, demographics
//! - **Language background** - native, known and target languages
//! - **Skill levels** - 1-10 self-assessment per skill
//! - **Goals** - goals, target level, time budget, motivation
//! - **Learning preferences** - styles, content, gamification, feedback
//! - **Cognitive profile** - behavioral and cognitive self-report
//! - **Adaptive settings** - engine tuning
//!
//! Derived analytics live on the profile but are never part of a patch.

pub(crate) mod macros;

mod analytics;
mod cefr;
mod diagnostic;
mod groups;
mod options;
mod patch;
mod scale;
mod skills;
mod user_profile;

pub use analytics::{ProfileAnalytics, TimeToGoal};
pub use cefr::CefrLevel;
pub use diagnostic::DiagnosticResult;
pub use groups::{
    AdaptiveSettings, AdaptiveSettingsPatch, CognitiveProfile, CognitiveProfilePatch, Goals,
    GoalsPatch, Identity, IdentityPatch, LanguageBackground, LanguageBackgroundPatch,
    LearningPreferences, LearningPreferencesPatch,
};
pub use options::{
    AgeRange, DifficultyAdjustment, EducationLevel, FeedbackStyle, GamificationLevel,
    KnownLanguage, LearningStyle, TimeOfDay, TutorPersonality,
};
pub use patch::ProfilePatch;
pub use scale::ScaleValue;
pub use skills::{SkillArea, SkillLevels, SkillLevelsPatch};
pub use user_profile::UserProfile;
