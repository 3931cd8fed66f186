//! Outcome of the diagnostic quiz as stored on the profile.

use serde::{Deserialize, Serialize};

use super::{CefrLevel, SkillArea};
use crate::domain::foundation::Percentage;

/// Folded result of the placement quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    /// Chosen option per question, `None` where skipped.
    pub answers: Vec<Option<usize>>,
    pub correct_answers: u8,
    pub score: Percentage,
    pub placement: CefrLevel,
    /// Skills covered by questions answered incorrectly.
    pub weak_areas: Vec<SkillArea>,
}
