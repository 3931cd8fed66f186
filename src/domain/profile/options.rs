//! Closed option sets offered by the single- and multi-select steps.

use serde::{Deserialize, Serialize};

use super::CefrLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "under_18")]
    Under18,
    #[serde(rename = "18_24")]
    From18To24,
    #[serde(rename = "25_34")]
    From25To34,
    #[serde(rename = "35_44")]
    From35To44,
    #[serde(rename = "45_54")]
    From45To54,
    #[serde(rename = "55_plus")]
    Over55,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Secondary,
    Vocational,
    Bachelor,
    Master,
    Doctorate,
    Other,
}

/// A language the learner already speaks, with a self-reported level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownLanguage {
    pub language: String,
    pub proficiency: CefrLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    ReadingWriting,
    Kinesthetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamificationLevel {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStyle {
    Immediate,
    EndOfSession,
    Gentle,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyAdjustment {
    #[default]
    Automatic,
    Gradual,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorPersonality {
    Encouraging,
    Strict,
    Humorous,
    Professional,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_range_uses_bucket_labels() {
        assert_eq!(
            serde_json::to_string(&AgeRange::From25To34).unwrap(),
            "\"25_34\""
        );
        let parsed: AgeRange = serde_json::from_str("\"55_plus\"").unwrap();
        assert_eq!(parsed, AgeRange::Over55);
    }

    #[test]
    fn learning_style_is_snake_case() {
        let parsed: LearningStyle = serde_json::from_str("\"reading_writing\"").unwrap();
        assert_eq!(parsed, LearningStyle::ReadingWriting);
    }

    #[test]
    fn gamification_levels_are_ordered() {
        assert!(GamificationLevel::High > GamificationLevel::Medium);
        assert!(GamificationLevel::None < GamificationLevel::Low);
    }
}
