//! Wizard flow configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::onboarding::{
    CriticalFieldTable, FlowRules, OnboardingStep, DEFAULT_TRIGGER_STEPS,
};

/// Step count, recommendation checkpoints and completeness table
#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Number of steps in the flow
    #[serde(default = "default_total_steps")]
    pub total_steps: u8,

    /// Steps whose arrival requests a recommendation batch
    #[serde(default = "default_trigger_steps")]
    pub recommendation_trigger_steps: Vec<u8>,

    /// Fields counted by the profile completeness score
    #[serde(default)]
    pub critical_fields: CriticalFieldTable,
}

impl WizardConfig {
    /// Validate wizard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_steps == 0 {
            return Err(ValidationError::NoSteps);
        }
        if let Some(step) = self
            .recommendation_trigger_steps
            .iter()
            .find(|step| **step == 0 || **step > self.total_steps)
        {
            return Err(ValidationError::TriggerStepOutOfRange {
                step: *step,
                total_steps: self.total_steps,
            });
        }
        Ok(())
    }

    /// Builds the reducer's flow rules from this section
    pub fn flow_rules(&self) -> Result<FlowRules, ValidationError> {
        self.validate()?;
        FlowRules::new(
            self.total_steps,
            self.recommendation_trigger_steps.iter().copied(),
            self.critical_fields.clone(),
        )
        .map_err(|_| ValidationError::NoSteps)
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            total_steps: default_total_steps(),
            recommendation_trigger_steps: default_trigger_steps(),
            critical_fields: CriticalFieldTable::default(),
        }
    }
}

fn default_total_steps() -> u8 {
    OnboardingStep::COUNT
}

fn default_trigger_steps() -> Vec<u8> {
    DEFAULT_TRIGGER_STEPS.to_vec()
}
