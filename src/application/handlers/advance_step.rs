//! AdvanceStepHandler - gated "continue" for the current step.

use crate::application::{OnboardingController, OnboardingError};
use crate::domain::onboarding::{OnboardingAction, OnboardingState};

/// Result of a successful advance.
#[derive(Debug, Clone)]
pub struct AdvanceStepResult {
    pub from_step: u8,
    pub state: OnboardingState,
}

/// Checks the current step's required fields, then moves forward.
///
/// The controller itself never validates; this handler is where a step's
/// gate is enforced. The check and the move happen under one state lock, so
/// an update from another clone of the controller cannot land in between.
pub struct AdvanceStepHandler {
    controller: OnboardingController,
}

impl AdvanceStepHandler {
    pub fn new(controller: OnboardingController) -> Self {
        Self { controller }
    }

    pub async fn handle(&self) -> Result<AdvanceStepResult, OnboardingError> {
        let mut from_step = 0;
        let state = self
            .controller
            .dispatch_guarded(OnboardingAction::Next, |current| {
                from_step = current.step().current();
                check_gate(current)
            })
            .await?;
        Ok(AdvanceStepResult { from_step, state })
    }
}

fn check_gate(current: &OnboardingState) -> Result<(), OnboardingError> {
    if current.is_completed() {
        return Ok(());
    }
    let Some(step) = current.step().step() else {
        return Ok(());
    };

    let gate = step.gate(current.profile());
    if gate.can_continue() {
        return Ok(());
    }
    tracing::debug!(
        step = current.step().current(),
        missing = gate.missing.len(),
        "Step gate closed"
    );
    Err(OnboardingError::StepIncomplete {
        step,
        hints: gate.hints(),
    })
}
