//! Recommendation heuristic - boolean rules mapped to a fixed suggestion catalog.
//!
//! Rules are evaluated in order; each matching rule contributes its suggestion
//! once. There is no ranking or scoring.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::profile::{GamificationLevel, LearningStyle, SkillArea, UserProfile};

/// Condition over a profile snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum RuleCondition {
    /// Some primary goal contains `needle` (case-insensitive).
    GoalContains { needle: String },
    /// Self-assessed `skill` level strictly below `level`.
    SkillBelow { skill: SkillArea, level: u8 },
    /// Learning styles include `style`.
    LearningStyleIncludes { style: LearningStyle },
    /// Gamification level equals `level`.
    GamificationIs { level: GamificationLevel },
    /// Anxiety level at or above `level`.
    AnxietyAtLeast { level: u8 },
    /// Daily minutes are set and strictly below `minutes`.
    DailyMinutesBelow { minutes: u16 },
}

impl RuleCondition {
    pub fn matches(&self, profile: &UserProfile) -> bool {
        match self {
            RuleCondition::GoalContains { needle } => {
                let needle = needle.to_lowercase();
                profile
                    .goals()
                    .primary_goals
                    .iter()
                    .any(|goal| goal.to_lowercase().contains(&needle))
            }
            RuleCondition::SkillBelow { skill, level } => {
                profile.skills().level(*skill).value() < *level
            }
            RuleCondition::LearningStyleIncludes { style } => {
                profile.preferences().learning_styles.contains(style)
            }
            RuleCondition::GamificationIs { level } => {
                profile.preferences().gamification_level == Some(*level)
            }
            RuleCondition::AnxietyAtLeast { level } => {
                profile.cognitive().anxiety_level.value() >= *level
            }
            RuleCondition::DailyMinutesBelow { minutes } => profile
                .goals()
                .daily_minutes
                .is_some_and(|daily| daily < *minutes),
        }
    }
}

/// One boolean→string rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRule {
    #[serde(flatten)]
    pub condition: RuleCondition,
    pub suggestion: String,
}

impl RecommendationRule {
    pub fn new(condition: RuleCondition, suggestion: impl Into<String>) -> Self {
        Self {
            condition,
            suggestion: suggestion.into(),
        }
    }
}

static DEFAULT_RULES: Lazy<Vec<RecommendationRule>> = Lazy::new(|| {
    vec![
        RecommendationRule::new(
            RuleCondition::GoalContains { needle: "business".into() },
            "Focus on business vocabulary and professional communication",
        ),
        RecommendationRule::new(
            RuleCondition::SkillBelow { skill: SkillArea::Speaking, level: 5 },
            "Add daily conversation practice to build speaking confidence",
        ),
        RecommendationRule::new(
            RuleCondition::LearningStyleIncludes { style: LearningStyle::Visual },
            "Use video lessons and visual flashcards",
        ),
        RecommendationRule::new(
            RuleCondition::GamificationIs { level: GamificationLevel::High },
            "Join daily challenges and leaderboards to stay motivated",
        ),
        RecommendationRule::new(
            RuleCondition::SkillBelow { skill: SkillArea::Listening, level: 5 },
            "Start a graded podcast track to train your ear",
        ),
        RecommendationRule::new(
            RuleCondition::AnxietyAtLeast { level: 7 },
            "Practice in low-pressure mode before live sessions",
        ),
        RecommendationRule::new(
            RuleCondition::DailyMinutesBelow { minutes: 15 },
            "Try five-minute micro-lessons to fit your schedule",
        ),
        RecommendationRule::new(
            RuleCondition::GoalContains { needle: "travel".into() },
            "Unlock the travel phrases pack for real-world situations",
        ),
    ]
});

/// Ordered rule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationCatalog {
    rules: Vec<RecommendationRule>,
}

impl RecommendationCatalog {
    pub fn new(rules: Vec<RecommendationRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    /// Suggestions of every matching rule, in rule order, without duplicates.
    pub fn evaluate(&self, profile: &UserProfile) -> Vec<String> {
        let mut suggestions: Vec<String> = Vec::new();
        for rule in &self.rules {
            if rule.condition.matches(profile) && !suggestions.contains(&rule.suggestion) {
                suggestions.push(rule.suggestion.clone());
            }
        }
        suggestions
    }
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.clone())
    }
}
