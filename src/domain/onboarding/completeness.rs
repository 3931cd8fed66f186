//! Profile completeness - share of critical fields that are populated.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::profile::UserProfile;

/// A profile attribute counted by the completeness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalField {
    FirstName,
    LastName,
    Email,
    AgeRange,
    Country,
    NativeLanguage,
    TargetLanguage,
    PrimaryGoals,
    TargetLevel,
    Timeframe,
    DailyMinutes,
    LearningStyles,
    ContentTypes,
    TopicsOfInterest,
    GamificationLevel,
    FeedbackStyle,
    DiagnosticResult,
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl CriticalField {
    /// Presence predicate: true when the field holds a non-empty value.
    pub fn is_populated(&self, profile: &UserProfile) -> bool {
        let identity = profile.identity();
        let language = profile.language();
        let goals = profile.goals();
        let prefs = profile.preferences();

        match self {
            CriticalField::FirstName => filled(&identity.first_name),
            CriticalField::LastName => filled(&identity.last_name),
            CriticalField::Email => filled(&identity.email),
            CriticalField::AgeRange => identity.age_range.is_some(),
            CriticalField::Country => filled(&identity.country),
            CriticalField::NativeLanguage => filled(&language.native_language),
            CriticalField::TargetLanguage => filled(&language.target_language),
            CriticalField::PrimaryGoals => !goals.primary_goals.is_empty(),
            CriticalField::TargetLevel => goals.target_level.is_some(),
            CriticalField::Timeframe => goals.timeframe_months.is_some_and(|m| m > 0),
            CriticalField::DailyMinutes => goals.daily_minutes.is_some_and(|m| m > 0),
            CriticalField::LearningStyles => !prefs.learning_styles.is_empty(),
            CriticalField::ContentTypes => !prefs.content_types.is_empty(),
            CriticalField::TopicsOfInterest => !prefs.topics_of_interest.is_empty(),
            CriticalField::GamificationLevel => prefs.gamification_level.is_some(),
            CriticalField::FeedbackStyle => prefs.feedback_style.is_some(),
            CriticalField::DiagnosticResult => profile.diagnostic().is_some(),
        }
    }
}

/// The set of critical fields the completeness score is computed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriticalFieldTable(Vec<CriticalField>);

impl CriticalFieldTable {
    /// The standard fourteen fields.
    pub const DEFAULT_FIELDS: [CriticalField; 14] = [
        CriticalField::FirstName,
        CriticalField::Email,
        CriticalField::AgeRange,
        CriticalField::NativeLanguage,
        CriticalField::TargetLanguage,
        CriticalField::PrimaryGoals,
        CriticalField::TargetLevel,
        CriticalField::Timeframe,
        CriticalField::DailyMinutes,
        CriticalField::LearningStyles,
        CriticalField::ContentTypes,
        CriticalField::TopicsOfInterest,
        CriticalField::GamificationLevel,
        CriticalField::FeedbackStyle,
    ];

    /// Builds a table, dropping duplicate entries.
    pub fn new(fields: impl IntoIterator<Item = CriticalField>) -> Self {
        let mut unique: Vec<CriticalField> = Vec::new();
        for field in fields {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        Self(unique)
    }

    pub fn fields(&self) -> &[CriticalField] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of populated fields.
    pub fn populated(&self, profile: &UserProfile) -> usize {
        self.0.iter().filter(|f| f.is_populated(profile)).count()
    }

    /// Fields still empty, in table order.
    pub fn missing(&self, profile: &UserProfile) -> Vec<CriticalField> {
        self.0
            .iter()
            .filter(|f| !f.is_populated(profile))
            .copied()
            .collect()
    }

    /// `round(populated / total * 100)`; zero for an empty table.
    pub fn completeness(&self, profile: &UserProfile) -> Percentage {
        Percentage::from_ratio(self.populated(profile), self.len())
    }
}

impl Default for CriticalFieldTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FIELDS)
    }
}
