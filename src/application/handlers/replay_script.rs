//! ReplayScriptHandler - drives a scripted session through the controller.
//!
//! Scripts are JSON or YAML documents listing actions in order:
//!
//! ```yaml
//! actions:
//!   - update: {identity: {first_name: Ana, email: ana@example.com}}
//!   - next
//!   - quiz: [1, 2, 2, null, 2]
//!   - advance
//!   - complete
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::application::{AdvanceStepHandler, OnboardingController, OnboardingError};
use crate::domain::onboarding::{DiagnosticQuiz, OnboardingState, OnboardingStep};
use crate::domain::profile::ProfilePatch;

/// One scripted user interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAction {
    /// Merge a partial profile update.
    Update(ProfilePatch),
    /// Move forward without checking the step gate.
    Next,
    /// Move forward only if the step gate passes.
    Advance,
    Back,
    /// Answer the diagnostic quiz; `null` skips a question.
    Quiz(Vec<Option<usize>>),
    /// Block until outstanding recommendation batches have landed.
    WaitForRecommendations,
    Complete,
}

/// A list of actions replayed in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub actions: Vec<ScriptAction>,
}

impl Script {
    pub fn from_json(input: &str) -> Result<Self, OnboardingError> {
        serde_json::from_str(input).map_err(|e| OnboardingError::InvalidScript(e.to_string()))
    }

    /// Parses YAML where payload actions are written as single-key maps
    /// (`- update: {...}`) rather than `!tag` values.
    pub fn from_yaml(input: &str) -> Result<Self, OnboardingError> {
        let deserializer = serde_yaml::Deserializer::from_str(input);
        serde_yaml::with::singleton_map_recursive::deserialize(deserializer)
            .map_err(|e| OnboardingError::InvalidScript(e.to_string()))
    }

    /// Reads a script, choosing the format by file extension.
    pub fn load(path: &Path) -> Result<Self, OnboardingError> {
        let input = std::fs::read_to_string(path).map_err(|e| {
            OnboardingError::InvalidScript(format!("{}: {}", path.display(), e))
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&input),
            Some("yaml") | Some("yml") => Self::from_yaml(&input),
            other => Err(OnboardingError::InvalidScript(format!(
                "unsupported script format: {:?}",
                other.unwrap_or("")
            ))),
        }
    }
}

/// A gated advance the script asked for but the step refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedAdvance {
    pub step: OnboardingStep,
    pub hints: Vec<&'static str>,
}

/// Final state plus the advances that were refused along the way.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    pub state: OnboardingState,
    pub rejected: Vec<RejectedAdvance>,
}

/// Replays scripts against one controller.
pub struct ReplayScriptHandler {
    controller: OnboardingController,
    advance: AdvanceStepHandler,
}

impl ReplayScriptHandler {
    pub fn new(controller: OnboardingController) -> Self {
        Self {
            advance: AdvanceStepHandler::new(controller.clone()),
            controller,
        }
    }

    /// Runs every action; stops at the first collaborator error.
    pub async fn handle(&self, script: Script) -> Result<ReplayOutcome, OnboardingError> {
        let mut rejected = Vec::new();

        for (idx, action) in script.actions.into_iter().enumerate() {
            tracing::debug!(index = idx, ?action, "Replaying action");
            match action {
                ScriptAction::Update(patch) => {
                    self.controller.update_profile(patch).await?;
                }
                ScriptAction::Next => {
                    self.controller.next().await?;
                }
                ScriptAction::Back => {
                    self.controller.back().await?;
                }
                ScriptAction::Advance => match self.advance.handle().await {
                    Ok(_) => {}
                    Err(OnboardingError::StepIncomplete { step, hints }) => {
                        tracing::warn!(index = idx, %step, "Scripted advance refused");
                        rejected.push(RejectedAdvance { step, hints });
                    }
                    Err(other) => return Err(other),
                },
                ScriptAction::Quiz(answers) => {
                    let mut quiz = DiagnosticQuiz::new();
                    for (question, answer) in answers.into_iter().enumerate() {
                        if let Some(option) = answer {
                            quiz.answer(question, option)?;
                        }
                    }
                    if !quiz.is_finished() {
                        tracing::debug!(index = idx, "Quiz submitted with skipped questions");
                    }
                    self.controller.update_profile(quiz.into_patch()).await?;
                }
                ScriptAction::WaitForRecommendations => {
                    self.controller.wait_for_recommendations().await?;
                }
                ScriptAction::Complete => {
                    self.controller.complete().await?;
                }
            }
        }

        Ok(ReplayOutcome {
            state: self.controller.snapshot().await,
            rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEventBus, InMemoryProfileSink, StaticRecommendationProvider};
    use crate::domain::onboarding::FlowRules;
    use crate::domain::profile::CefrLevel;
    use std::io::Write;
    use std::sync::Arc;

    fn handler() -> ReplayScriptHandler {
        ReplayScriptHandler::new(OnboardingController::new(
            FlowRules::default(),
            Arc::new(StaticRecommendationProvider::new(vec!["Tip".into()])),
            Arc::new(InMemoryProfileSink::new()),
            Arc::new(InMemoryEventBus::new()),
        ))
    }

    #[test]
    fn parses_yaml_with_unit_and_payload_actions() {
        let script = Script::from_yaml(
            "actions:\n  - next\n  - update:\n      identity:\n        first_name: Ana\n  - quiz: [1, null]\n  - complete\n",
        )
        .unwrap();

        assert_eq!(script.actions.len(), 4);
        assert_eq!(script.actions[0], ScriptAction::Next);
        assert_eq!(script.actions[2], ScriptAction::Quiz(vec![Some(1), None]));
    }

    #[test]
    fn yaml_update_carries_nested_patch() {
        let script = Script::from_yaml(
            "actions:\n  - update:\n      identity:\n        email: ana@example.com\n        country: null\n",
        )
        .unwrap();

        match &script.actions[0] {
            ScriptAction::Update(patch) => {
                assert_eq!(
                    patch.changed_fields(),
                    vec!["identity.email".to_string(), "identity.country".to_string()]
                );
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn parses_json() {
        let script = Script::from_json(
            r#"{"actions": ["next", {"update": {"goals": {"daily_minutes": 20}}}, "back"]}"#,
        )
        .unwrap();
        assert_eq!(script.actions.len(), 3);
    }

    #[test]
    fn rejects_unknown_action() {
        let err = Script::from_json(r#"{"actions": ["jump"]}"#).unwrap_err();
        assert!(matches!(err, OnboardingError::InvalidScript(_)));
    }

    #[test]
    fn load_picks_format_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        file.write_all(b"actions: [next, next]\n").unwrap();

        let script = Script::load(file.path()).unwrap();
        assert_eq!(script.actions, vec![ScriptAction::Next, ScriptAction::Next]);

        let txt = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(Script::load(txt.path()).is_err());
    }

    #[tokio::test]
    async fn replays_actions_and_records_refused_advances() {
        let script = Script {
            actions: vec![
                ScriptAction::Next,
                ScriptAction::Advance,
                ScriptAction::Next,
                ScriptAction::Next,
                ScriptAction::Next,
                ScriptAction::Quiz(vec![Some(1), Some(2), Some(2), Some(0), None]),
                ScriptAction::WaitForRecommendations,
                ScriptAction::Complete,
            ],
        };

        let outcome = handler().handle(script).await.unwrap();

        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].step, OnboardingStep::PersonalInfo);
        assert_eq!(outcome.state.step().current(), 5);
        assert!(outcome.state.is_completed());
        let diagnostic = outcome.state.profile().diagnostic().unwrap();
        assert_eq!(diagnostic.score.value(), 60);
        assert_eq!(diagnostic.placement, CefrLevel::B1);
        assert_eq!(
            outcome.state.profile().analytics().ai_recommendations,
            vec!["Tip".to_string()]
        );
    }

    #[tokio::test]
    async fn invalid_quiz_answer_stops_replay() {
        let script = Script {
            actions: vec![ScriptAction::Quiz(vec![Some(9)])],
        };

        let err = handler().handle(script).await.unwrap_err();

        assert!(matches!(err, OnboardingError::Validation(_)));
    }
}
