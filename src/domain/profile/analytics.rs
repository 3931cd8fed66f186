//! Derived analytics carried on the profile.
//!
//! Nothing here is part of [`ProfilePatch`](super::ProfilePatch); the fields
//! are written only by the onboarding reducer.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SkillArea;
use crate::domain::foundation::Percentage;

/// Estimated study time until the target level is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum TimeToGoal {
    /// Current level already meets the target.
    AlreadyReached,
    /// Whole months of study, at least one.
    Months(u32),
    /// Not enough information (no target level or no daily time).
    Unknown,
}

impl fmt::Display for TimeToGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeToGoal::AlreadyReached => write!(f, "Goal already reached"),
            TimeToGoal::Months(1) => write!(f, "1 month"),
            TimeToGoal::Months(months) => write!(f, "{} months", months),
            TimeToGoal::Unknown => write!(f, "Not enough information"),
        }
    }
}

/// Derived fields recomputed after every profile mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalytics {
    pub completion_percentage: Percentage,
    pub profile_completeness: Percentage,
    /// Suggestions from the last recommendation batch.
    pub ai_recommendations: Vec<String>,
    pub skill_gaps: Vec<SkillArea>,
    pub strength_areas: Vec<SkillArea>,
    pub recommended_courses: Vec<String>,
    pub estimated_time_to_goal: Option<TimeToGoal>,
}
