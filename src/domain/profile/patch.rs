//! ProfilePatch - a partial update to the learner profile.

use serde::{Deserialize, Serialize};

use super::macros::deserialize_present;
use super::{
    AdaptiveSettingsPatch, CognitiveProfilePatch, DiagnosticResult, GoalsPatch, IdentityPatch,
    LanguageBackgroundPatch, LearningPreferencesPatch, SkillLevelsPatch,
};

/// Partial profile update dispatched by a step.
///
/// Each group patch only overwrites the keys it carries. Derived analytics
/// are not representable here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "IdentityPatch::is_empty")]
    pub identity: IdentityPatch,
    #[serde(skip_serializing_if = "LanguageBackgroundPatch::is_empty")]
    pub language: LanguageBackgroundPatch,
    #[serde(skip_serializing_if = "SkillLevelsPatch::is_empty")]
    pub skills: SkillLevelsPatch,
    #[serde(skip_serializing_if = "GoalsPatch::is_empty")]
    pub goals: GoalsPatch,
    #[serde(skip_serializing_if = "LearningPreferencesPatch::is_empty")]
    pub preferences: LearningPreferencesPatch,
    #[serde(skip_serializing_if = "CognitiveProfilePatch::is_empty")]
    pub cognitive: CognitiveProfilePatch,
    #[serde(skip_serializing_if = "AdaptiveSettingsPatch::is_empty")]
    pub adaptive: AdaptiveSettingsPatch,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub diagnostic: Option<Option<DiagnosticResult>>,
}

impl ProfilePatch {
    pub fn identity(identity: IdentityPatch) -> Self {
        Self {
            identity,
            ..Self::default()
        }
    }

    pub fn language(language: LanguageBackgroundPatch) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn skills(skills: SkillLevelsPatch) -> Self {
        Self {
            skills,
            ..Self::default()
        }
    }

    pub fn goals(goals: GoalsPatch) -> Self {
        Self {
            goals,
            ..Self::default()
        }
    }

    pub fn preferences(preferences: LearningPreferencesPatch) -> Self {
        Self {
            preferences,
            ..Self::default()
        }
    }

    pub fn cognitive(cognitive: CognitiveProfilePatch) -> Self {
        Self {
            cognitive,
            ..Self::default()
        }
    }

    pub fn adaptive(adaptive: AdaptiveSettingsPatch) -> Self {
        Self {
            adaptive,
            ..Self::default()
        }
    }

    pub fn diagnostic(result: DiagnosticResult) -> Self {
        Self {
            diagnostic: Some(Some(result)),
            ..Self::default()
        }
    }

    /// Returns true when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.identity.is_empty()
            && self.language.is_empty()
            && self.skills.is_empty()
            && self.goals.is_empty()
            && self.preferences.is_empty()
            && self.cognitive.is_empty()
            && self.adaptive.is_empty()
            && self.diagnostic.is_none()
    }

    /// Dotted paths of every key this patch carries, e.g. `goals.daily_minutes`.
    pub fn changed_fields(&self) -> Vec<String> {
        let groups = [
            ("identity", self.identity.present_fields()),
            ("language", self.language.present_fields()),
            ("skills", self.skills.present_fields()),
            ("goals", self.goals.present_fields()),
            ("preferences", self.preferences.present_fields()),
            ("cognitive", self.cognitive.present_fields()),
            ("adaptive", self.adaptive.present_fields()),
        ];

        let mut changed: Vec<String> = groups
            .iter()
            .flat_map(|(group, fields)| fields.iter().map(move |f| format!("{}.{}", group, f)))
            .collect();
        if self.diagnostic.is_some() {
            changed.push("diagnostic".to_string());
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ScaleValue;

    #[test]
    fn default_patch_is_empty() {
        let patch = ProfilePatch::default();
        assert!(patch.is_empty());
        assert!(patch.changed_fields().is_empty());
    }

    #[test]
    fn changed_fields_lists_dotted_paths() {
        let mut patch = ProfilePatch::goals(GoalsPatch::default().daily_minutes(Some(30)));
        patch.skills = SkillLevelsPatch::default().speaking(ScaleValue::clamped(3));

        assert_eq!(
            patch.changed_fields(),
            vec!["skills.speaking".to_string(), "goals.daily_minutes".to_string()]
        );
    }

    #[test]
    fn deserializes_nested_json() {
        let patch: ProfilePatch = serde_json::from_str(
            r#"{
                "identity": {"first_name": "Ana"},
                "goals": {"primary_goals": ["business_english"]}
            }"#,
        )
        .unwrap();

        assert_eq!(patch.identity.first_name, Some(Some("Ana".to_string())));
        assert_eq!(
            patch.goals.primary_goals,
            Some(vec!["business_english".to_string()])
        );
        assert!(patch.language.is_empty());
    }

    #[test]
    fn null_diagnostic_is_a_present_key() {
        let patch: ProfilePatch = serde_json::from_str(r#"{"diagnostic": null}"#).unwrap();
        assert_eq!(patch.diagnostic, Some(None));
        assert!(!patch.is_empty());
    }

    #[test]
    fn serializes_only_present_groups() {
        let patch = ProfilePatch::identity(IdentityPatch::default().country(Some("PT".into())));
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"identity": {"country": "PT"}}));
    }
}
