//! Onboarding lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle of one onboarding run.
///
/// `InProgress -> Completed` is the only transition; completion is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    #[default]
    InProgress,
    Completed,
}

impl OnboardingStatus {
    /// Returns true once the run has been completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, OnboardingStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_in_progress() {
        assert_eq!(OnboardingStatus::default(), OnboardingStatus::InProgress);
        assert!(!OnboardingStatus::default().is_completed());
        assert!(OnboardingStatus::Completed.is_completed());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OnboardingStatus::InProgress).unwrap(),
            r#""in_progress""#
        );
    }
}
