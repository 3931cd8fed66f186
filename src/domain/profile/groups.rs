//! Profile groups collected by the form steps.

use super::macros::profile_group;
use super::{
    AgeRange, CefrLevel, DifficultyAdjustment, EducationLevel, FeedbackStyle,
    GamificationLevel, KnownLanguage, LearningStyle, ScaleValue, TimeOfDay, TutorPersonality,
};

profile_group! {
    /// Who the learner is.
    Identity / IdentityPatch {
        first_name: Option<String> = None,
        last_name: Option<String> = None,
        email: Option<String> = None,
        age_range: Option<AgeRange> = None,
        country: Option<String> = None,
        occupation: Option<String> = None,
        education_level: Option<EducationLevel> = None,
    }
}

profile_group! {
    /// Languages the learner speaks and the one they want to learn.
    LanguageBackground / LanguageBackgroundPatch {
        native_language: Option<String> = None,
        other_languages: Vec<KnownLanguage> = Vec::new(),
        target_language: Option<String> = None,
        years_studying: u8 = 0,
        /// Prior experience labels such as `school` or `app`.
        previous_experience: Vec<String> = Vec::new(),
        learning_contexts: Vec<String> = Vec::new(),
    }
}

profile_group! {
    /// What the learner wants to reach and how much time they have.
    Goals / GoalsPatch {
        /// Free-form goal ids, e.g. `business_english` or `travel`.
        primary_goals: Vec<String> = Vec::new(),
        target_level: Option<CefrLevel> = None,
        timeframe_months: Option<u16> = None,
        motivation: ScaleValue = ScaleValue::MID,
        daily_minutes: Option<u16> = None,
        weekly_sessions: Option<u8> = None,
    }
}

profile_group! {
    /// How the learner likes to study.
    LearningPreferences / LearningPreferencesPatch {
        learning_styles: Vec<LearningStyle> = Vec::new(),
        content_types: Vec<String> = Vec::new(),
        topics_of_interest: Vec<String> = Vec::new(),
        gamification_level: Option<GamificationLevel> = None,
        feedback_style: Option<FeedbackStyle> = None,
        session_length_minutes: Option<u16> = None,
        preferred_time_of_day: Option<TimeOfDay> = None,
    }
}

profile_group! {
    /// Behavioral and cognitive self-report.
    CognitiveProfile / CognitiveProfilePatch {
        memory_strength: ScaleValue = ScaleValue::MID,
        attention_span: ScaleValue = ScaleValue::MID,
        processing_speed: ScaleValue = ScaleValue::MID,
        anxiety_level: ScaleValue = ScaleValue::MID,
        confidence_level: ScaleValue = ScaleValue::MID,
        self_discipline: ScaleValue = ScaleValue::MID,
        personality_traits: Vec<String> = Vec::new(),
        learning_challenges: Vec<String> = Vec::new(),
        study_environment: Option<String> = None,
    }
}

profile_group! {
    /// Tuning knobs for the adaptive engine.
    AdaptiveSettings / AdaptiveSettingsPatch {
        difficulty_adjustment: DifficultyAdjustment = DifficultyAdjustment::Automatic,
        spaced_repetition: bool = true,
        tutor_personality: Option<TutorPersonality> = None,
        reminders_enabled: bool = true,
    }
}
