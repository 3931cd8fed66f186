//! Application layer - Controller and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The controller owns the flow state; handlers build on it.

mod controller;
mod errors;
pub mod handlers;

pub use controller::OnboardingController;
pub use errors::OnboardingError;
pub use handlers::{
    AdvanceStepHandler, AdvanceStepResult, RejectedAdvance, ReplayOutcome, ReplayScriptHandler,
    Script, ScriptAction,
};
