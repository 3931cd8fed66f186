//! Application-level error type for the onboarding flow.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::onboarding::OnboardingStep;

/// Errors surfaced by the controller and handlers.
///
/// Reducer transitions never fail; these come from collaborators, gates and
/// input parsing.
#[derive(Debug, Error)]
pub enum OnboardingError {
    /// The current step's required fields are not filled in.
    #[error("{step} is incomplete: {}", .hints.join("; "))]
    StepIncomplete {
        step: OnboardingStep,
        hints: Vec<&'static str>,
    },

    /// The profile sink rejected the completed profile.
    #[error("profile submission failed: {0}")]
    ProfileSink(#[source] DomainError),

    /// An event could not be published.
    #[error("event publication failed: {0}")]
    EventPublish(#[source] DomainError),

    /// A spawned recommendation task panicked or was cancelled.
    #[error("recommendation task failed: {0}")]
    TaskFailed(String),

    /// A scripted session could not be read or parsed.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl OnboardingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OnboardingError::StepIncomplete { .. } => ErrorCode::StepIncomplete,
            OnboardingError::ProfileSink(_) => ErrorCode::ProfileSinkError,
            OnboardingError::EventPublish(_) => ErrorCode::EventPublishError,
            OnboardingError::TaskFailed(_) => ErrorCode::InternalError,
            OnboardingError::InvalidScript(_) => ErrorCode::InvalidFormat,
            OnboardingError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_incomplete_lists_hints() {
        let err = OnboardingError::StepIncomplete {
            step: OnboardingStep::PersonalInfo,
            hints: vec!["Enter your first name", "Enter a valid email address"],
        };
        let message = err.to_string();
        assert!(message.contains("Enter your first name; Enter a valid email address"));
        assert_eq!(err.code(), ErrorCode::StepIncomplete);
    }

    #[test]
    fn sink_error_maps_to_sink_code() {
        let err = OnboardingError::ProfileSink(DomainError::new(
            ErrorCode::ProfileSinkError,
            "offline",
        ));
        assert_eq!(err.code(), ErrorCode::ProfileSinkError);
        assert!(err.to_string().contains("offline"));
    }
}
