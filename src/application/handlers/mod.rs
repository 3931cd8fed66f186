//! Application handlers.
//!
//! Command handlers that orchestrate the onboarding controller.

mod advance_step;
mod replay_script;

pub use advance_step::{AdvanceStepHandler, AdvanceStepResult};
pub use replay_script::{RejectedAdvance, ReplayOutcome, ReplayScriptHandler, Script, ScriptAction};
