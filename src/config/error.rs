//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Wizard must have at least one step")]
    NoSteps,

    #[error("Recommendation trigger step {step} is outside 1..={total_steps}")]
    TriggerStepOutOfRange { step: u8, total_steps: u8 },

    #[error("Simulated recommendation delay exceeds maximum allowed (60000ms)")]
    SimulatedDelayTooLong,

    #[error("Custom recommendation catalog has no rules")]
    EmptyRuleCatalog,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
