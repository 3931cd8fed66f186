//! UserProfile aggregate - the single record built up by the onboarding steps.

use serde::Serialize;

use super::{
    AdaptiveSettings, CognitiveProfile, DiagnosticResult, Goals, Identity, LanguageBackground,
    LearningPreferences, ProfileAnalytics, ProfilePatch, SkillLevels,
};

/// Learner profile collected across the onboarding steps.
///
/// # Invariants
///
/// - Input groups change only through [`UserProfile::apply_patch`]
/// - `analytics` is written only by the onboarding reducer (crate-private)
/// - `onboarding_step` mirrors the flow's current step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    identity: Identity,
    language: LanguageBackground,
    skills: SkillLevels,
    goals: Goals,
    preferences: LearningPreferences,
    cognitive: CognitiveProfile,
    adaptive: AdaptiveSettings,
    diagnostic: Option<DiagnosticResult>,
    onboarding_step: u8,
    analytics: ProfileAnalytics,
}

impl UserProfile {
    /// Creates an empty profile positioned at step 1.
    pub fn new() -> Self {
        Self {
            identity: Identity::default(),
            language: LanguageBackground::default(),
            skills: SkillLevels::default(),
            goals: Goals::default(),
            preferences: LearningPreferences::default(),
            cognitive: CognitiveProfile::default(),
            adaptive: AdaptiveSettings::default(),
            diagnostic: None,
            onboarding_step: 1,
            analytics: ProfileAnalytics::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn language(&self) -> &LanguageBackground {
        &self.language
    }

    pub fn skills(&self) -> &SkillLevels {
        &self.skills
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    pub fn preferences(&self) -> &LearningPreferences {
        &self.preferences
    }

    pub fn cognitive(&self) -> &CognitiveProfile {
        &self.cognitive
    }

    pub fn adaptive(&self) -> &AdaptiveSettings {
        &self.adaptive
    }

    pub fn diagnostic(&self) -> Option<&DiagnosticResult> {
        self.diagnostic.as_ref()
    }

    pub fn onboarding_step(&self) -> u8 {
        self.onboarding_step
    }

    pub fn analytics(&self) -> &ProfileAnalytics {
        &self.analytics
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Merges a patch: keys present in the patch overwrite, everything else is kept.
    pub fn apply_patch(&mut self, patch: &ProfilePatch) {
        patch.identity.apply_to(&mut self.identity);
        patch.language.apply_to(&mut self.language);
        patch.skills.apply_to(&mut self.skills);
        patch.goals.apply_to(&mut self.goals);
        patch.preferences.apply_to(&mut self.preferences);
        patch.cognitive.apply_to(&mut self.cognitive);
        patch.adaptive.apply_to(&mut self.adaptive);
        if let Some(diagnostic) = &patch.diagnostic {
            self.diagnostic = diagnostic.clone();
        }
    }

    pub(crate) fn set_onboarding_step(&mut self, step: u8) {
        self.onboarding_step = step;
    }

    pub(crate) fn analytics_mut(&mut self) -> &mut ProfileAnalytics {
        &mut self.analytics
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}
