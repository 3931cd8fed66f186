//! Completion analytics - summary fields computed when onboarding completes.
//!
//! All functions are pure over a profile snapshot. The estimates are weighted
//! averages, not a learned model.

use crate::domain::profile::{SkillArea, TimeToGoal, UserProfile};

/// Skills below this level are gaps.
pub const GAP_THRESHOLD: u8 = 5;

/// Skills at or above this level are strengths.
pub const STRENGTH_THRESHOLD: u8 = 7;

/// Study hours needed to climb one point on the 1-10 scale.
pub const HOURS_PER_LEVEL_POINT: f64 = 120.0;

const WEEKS_PER_MONTH: f64 = 4.345;
const MAX_FOUNDATION_COURSES: usize = 3;

/// The four summary fields derived at completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSummary {
    pub skill_gaps: Vec<SkillArea>,
    pub strength_areas: Vec<SkillArea>,
    pub recommended_courses: Vec<String>,
    pub estimated_time_to_goal: TimeToGoal,
}

/// Computes every summary field.
pub fn summarize(profile: &UserProfile) -> CompletionSummary {
    let skill_gaps = skill_gaps(profile);
    CompletionSummary {
        strength_areas: strength_areas(profile),
        recommended_courses: recommended_courses(profile, &skill_gaps),
        estimated_time_to_goal: estimate_time_to_goal(profile),
        skill_gaps,
    }
}

/// Every skill with a level below [`GAP_THRESHOLD`], in assessment order.
pub fn skill_gaps(profile: &UserProfile) -> Vec<SkillArea> {
    profile
        .skills()
        .iter()
        .filter(|(_, level)| level.value() < GAP_THRESHOLD)
        .map(|(area, _)| area)
        .collect()
}

/// Every skill at or above [`STRENGTH_THRESHOLD`].
pub fn strength_areas(profile: &UserProfile) -> Vec<SkillArea> {
    profile
        .skills()
        .iter()
        .filter(|(_, level)| level.value() >= STRENGTH_THRESHOLD)
        .map(|(area, _)| area)
        .collect()
}

fn has_goal(profile: &UserProfile, needles: &[&str]) -> bool {
    profile.goals().primary_goals.iter().any(|goal| {
        let goal = goal.to_lowercase();
        needles.iter().any(|needle| goal.contains(needle))
    })
}

/// Course suggestions: foundations for the weakest gaps, then goal tracks.
pub fn recommended_courses(profile: &UserProfile, gaps: &[SkillArea]) -> Vec<String> {
    let mut courses: Vec<String> = gaps
        .iter()
        .take(MAX_FOUNDATION_COURSES)
        .map(|area| format!("{} Foundations", area.label()))
        .collect();

    if has_goal(profile, &["business"]) {
        courses.push("Business Communication".to_string());
    }
    if has_goal(profile, &["travel"]) {
        courses.push("Travel Essentials".to_string());
    }
    if has_goal(profile, &["academic", "exam"]) {
        courses.push("Exam Preparation".to_string());
    }
    if profile.goals().target_level.is_some_and(|level| level.is_advanced()) {
        courses.push("Advanced Fluency Masterclass".to_string());
    }
    if courses.is_empty() {
        courses.push("General Conversation".to_string());
    }

    let mut unique: Vec<String> = Vec::with_capacity(courses.len());
    for course in courses {
        if !unique.contains(&course) {
            unique.push(course);
        }
    }
    unique
}

/// Months of study to the target level.
///
/// The weighted skill average is compared with the target level on the 1-10
/// scale; the distance costs [`HOURS_PER_LEVEL_POINT`] each, paid at the weekly
/// study rate scaled by motivation (`0.5 + motivation / 20`).
pub fn estimate_time_to_goal(profile: &UserProfile) -> TimeToGoal {
    let goals = profile.goals();
    let (Some(target), Some(daily_minutes)) =
        (goals.target_level, goals.daily_minutes.filter(|m| *m > 0))
    else {
        return TimeToGoal::Unknown;
    };

    let gap = target.scale_equivalent() - profile.skills().weighted_average();
    if gap <= 0.0 {
        return TimeToGoal::AlreadyReached;
    }

    let sessions = f64::from(goals.weekly_sessions.unwrap_or(7).clamp(1, 7));
    let weekly_hours = f64::from(daily_minutes) * sessions / 60.0;
    let efficiency = 0.5 + f64::from(goals.motivation.value()) / 20.0;

    let weeks = gap * HOURS_PER_LEVEL_POINT / (weekly_hours * efficiency);
    let months = (weeks / WEEKS_PER_MONTH).ceil().max(1.0);
    TimeToGoal::Months(months as u32)
}
