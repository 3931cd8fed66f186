//! Skill self-assessment group.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::macros::profile_group;
use super::ScaleValue;

/// One of the assessed skill categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillArea {
    Speaking,
    Listening,
    Reading,
    Writing,
    Grammar,
    Vocabulary,
    Pronunciation,
}

impl SkillArea {
    /// All skill areas in assessment order.
    pub const ALL: [SkillArea; 7] = [
        SkillArea::Speaking,
        SkillArea::Listening,
        SkillArea::Reading,
        SkillArea::Writing,
        SkillArea::Grammar,
        SkillArea::Vocabulary,
        SkillArea::Pronunciation,
    ];

    /// Weight of this skill in the overall level estimate.
    ///
    /// Oral skills count one and a half times.
    pub fn weight(&self) -> f64 {
        match self {
            SkillArea::Speaking | SkillArea::Listening => 1.5,
            _ => 1.0,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SkillArea::Speaking => "Speaking",
            SkillArea::Listening => "Listening",
            SkillArea::Reading => "Reading",
            SkillArea::Writing => "Writing",
            SkillArea::Grammar => "Grammar",
            SkillArea::Vocabulary => "Vocabulary",
            SkillArea::Pronunciation => "Pronunciation",
        }
    }
}

impl fmt::Display for SkillArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

profile_group! {
    /// Self-assessed level per skill; every skill starts at 1.
    SkillLevels / SkillLevelsPatch {
        speaking: ScaleValue = ScaleValue::MIN,
        listening: ScaleValue = ScaleValue::MIN,
        reading: ScaleValue = ScaleValue::MIN,
        writing: ScaleValue = ScaleValue::MIN,
        grammar: ScaleValue = ScaleValue::MIN,
        vocabulary: ScaleValue = ScaleValue::MIN,
        pronunciation: ScaleValue = ScaleValue::MIN,
    }
}

impl SkillLevels {
    /// Returns the level for one skill.
    pub fn level(&self, area: SkillArea) -> ScaleValue {
        match area {
            SkillArea::Speaking => self.speaking,
            SkillArea::Listening => self.listening,
            SkillArea::Reading => self.reading,
            SkillArea::Writing => self.writing,
            SkillArea::Grammar => self.grammar,
            SkillArea::Vocabulary => self.vocabulary,
            SkillArea::Pronunciation => self.pronunciation,
        }
    }

    /// Iterates `(skill, level)` pairs in assessment order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillArea, ScaleValue)> + '_ {
        SkillArea::ALL.iter().map(move |area| (*area, self.level(*area)))
    }

    /// Weighted average level across all skills.
    pub fn weighted_average(&self) -> f64 {
        let (sum, weights) = self.iter().fold((0.0, 0.0), |(sum, weights), (area, level)| {
            (
                sum + f64::from(level.value()) * area.weight(),
                weights + area.weight(),
            )
        });
        sum / weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_every_skill_to_one() {
        let skills = SkillLevels::default();
        assert!(skills.iter().all(|(_, level)| level == ScaleValue::MIN));
        assert_eq!(skills.iter().count(), SkillArea::ALL.len());
    }

    #[test]
    fn weighted_average_favours_oral_skills() {
        let skills = SkillLevels {
            speaking: ScaleValue::MAX,
            listening: ScaleValue::MAX,
            ..SkillLevels::default()
        };
        // (10*1.5*2 + 1*5) / (1.5*2 + 5) = 35 / 8
        assert!((skills.weighted_average() - 4.375).abs() < 1e-9);
    }

    #[test]
    fn patch_overwrites_only_present_skills() {
        let mut skills = SkillLevels::default();
        let patch = SkillLevelsPatch::default().reading(ScaleValue::clamped(6));

        patch.apply_to(&mut skills);

        assert_eq!(skills.reading.value(), 6);
        assert_eq!(skills.speaking, ScaleValue::MIN);
        assert_eq!(patch.present_fields(), vec!["reading"]);
    }

    #[test]
    fn patch_rejects_out_of_range_levels() {
        let result: Result<SkillLevelsPatch, _> = serde_json::from_str(r#"{"speaking": 0}"#);
        assert!(result.is_err());
    }
}
