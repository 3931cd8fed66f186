//! Flow rules - the tunable tables the reducer runs against.

use std::collections::BTreeSet;

use super::{CriticalFieldTable, StepIndex};
use crate::domain::foundation::ValidationError;

/// Steps whose arrival requests a recommendation batch by default.
pub const DEFAULT_TRIGGER_STEPS: [u8; 3] = [5, 10, 15];

/// Step count, recommendation triggers and completeness table for one flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRules {
    first_step: StepIndex,
    recommendation_triggers: BTreeSet<u8>,
    critical_fields: CriticalFieldTable,
}

impl FlowRules {
    /// Builds rules, rejecting zero steps and triggers outside `[1, total_steps]`.
    pub fn new(
        total_steps: u8,
        recommendation_triggers: impl IntoIterator<Item = u8>,
        critical_fields: CriticalFieldTable,
    ) -> Result<Self, ValidationError> {
        let first_step = StepIndex::start(total_steps)?;
        let recommendation_triggers: BTreeSet<u8> = recommendation_triggers.into_iter().collect();
        if let Some(bad) = recommendation_triggers
            .iter()
            .find(|step| **step == 0 || **step > total_steps)
        {
            return Err(ValidationError::out_of_range(
                "recommendation_trigger_steps",
                1,
                total_steps as i32,
                *bad as i32,
            ));
        }
        Ok(Self {
            first_step,
            recommendation_triggers,
            critical_fields,
        })
    }

    pub fn total_steps(&self) -> u8 {
        self.first_step.total()
    }

    /// Index positioned at step 1.
    pub fn first_step(&self) -> StepIndex {
        self.first_step
    }

    pub fn recommendation_triggers(&self) -> &BTreeSet<u8> {
        &self.recommendation_triggers
    }

    /// Returns true when arriving at `step` requests recommendations.
    pub fn triggers_recommendations(&self, step: u8) -> bool {
        self.recommendation_triggers.contains(&step)
    }

    pub fn critical_fields(&self) -> &CriticalFieldTable {
        &self.critical_fields
    }
}

impl Default for FlowRules {
    fn default() -> Self {
        Self {
            first_step: StepIndex::first_of_standard_flow(),
            recommendation_triggers: DEFAULT_TRIGGER_STEPS.into_iter().collect(),
            critical_fields: CriticalFieldTable::default(),
        }
    }
}
