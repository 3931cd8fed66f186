//! Diagnostic quiz - the placement screen with its own local answer state.
//!
//! Answers stay on the quiz until the learner leaves the screen; only then is
//! the outcome folded into a [`ProfilePatch`].

use serde::Serialize;

use crate::domain::foundation::{Percentage, ValidationError};
use crate::domain::profile::{CefrLevel, DiagnosticResult, ProfilePatch, SkillArea};

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct_option: usize,
    pub skill: SkillArea,
}

/// Fixed placement questions, easiest first.
pub const QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        prompt: "Choose the correct form: \"She ___ to work every day.\"",
        options: &["go", "goes", "going", "gone"],
        correct_option: 1,
        skill: SkillArea::Grammar,
    },
    QuizQuestion {
        prompt: "Which word is closest in meaning to \"purchase\"?",
        options: &["sell", "borrow", "buy", "lend"],
        correct_option: 2,
        skill: SkillArea::Vocabulary,
    },
    QuizQuestion {
        prompt: "\"The museum closes at six, so we should leave by five.\" When should we leave?",
        options: &["At six", "Before five", "By five", "After six"],
        correct_option: 2,
        skill: SkillArea::Reading,
    },
    QuizQuestion {
        prompt: "Complete the sentence: \"If I ___ more time, I would learn the piano.\"",
        options: &["have", "had", "will have", "am having"],
        correct_option: 1,
        skill: SkillArea::Grammar,
    },
    QuizQuestion {
        prompt: "Pick the most formal way to close an email to a client.",
        options: &["Cheers", "See ya", "Kind regards", "Later"],
        correct_option: 2,
        skill: SkillArea::Writing,
    },
];

/// Points awarded per correct answer.
pub const POINTS_PER_QUESTION: u8 = 20;

/// Maps a linear quiz score onto a CEFR placement.
pub fn placement_for(score: Percentage) -> CefrLevel {
    match score.value() {
        0..=20 => CefrLevel::A1,
        21..=40 => CefrLevel::A2,
        41..=60 => CefrLevel::B1,
        61..=80 => CefrLevel::B2,
        _ => CefrLevel::C1,
    }
}

/// Local state of the diagnostic screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticQuiz {
    answers: Vec<Option<usize>>,
}

impl DiagnosticQuiz {
    /// Starts with every question unanswered.
    pub fn new() -> Self {
        Self {
            answers: vec![None; QUESTIONS.len()],
        }
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        &QUESTIONS
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Records (or replaces) the chosen option for a question.
    pub fn answer(&mut self, question: usize, option: usize) -> Result<(), ValidationError> {
        let Some(q) = QUESTIONS.get(question) else {
            return Err(ValidationError::out_of_range(
                "question",
                0,
                QUESTIONS.len() as i32 - 1,
                question as i32,
            ));
        };
        if option >= q.options.len() {
            return Err(ValidationError::out_of_range(
                "option",
                0,
                q.options.len() as i32 - 1,
                option as i32,
            ));
        }
        self.answers[question] = Some(option);
        Ok(())
    }

    /// Returns true once every question has an answer.
    pub fn is_finished(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    fn is_correct(&self, idx: usize) -> bool {
        self.answers[idx] == Some(QUESTIONS[idx].correct_option)
    }

    pub fn correct_answers(&self) -> u8 {
        (0..QUESTIONS.len()).filter(|idx| self.is_correct(*idx)).count() as u8
    }

    /// Linear score: 20 points per correct answer.
    pub fn score(&self) -> Percentage {
        Percentage::new(self.correct_answers() * POINTS_PER_QUESTION)
    }

    pub fn placement(&self) -> CefrLevel {
        placement_for(self.score())
    }

    /// Skills covered by missed or skipped questions, without repeats.
    pub fn weak_areas(&self) -> Vec<SkillArea> {
        let mut areas = Vec::new();
        for (idx, question) in QUESTIONS.iter().enumerate() {
            if !self.is_correct(idx) && !areas.contains(&question.skill) {
                areas.push(question.skill);
            }
        }
        areas
    }

    pub fn result(&self) -> DiagnosticResult {
        DiagnosticResult {
            answers: self.answers.clone(),
            correct_answers: self.correct_answers(),
            score: self.score(),
            placement: self.placement(),
            weak_areas: self.weak_areas(),
        }
    }

    /// Folds the quiz into the patch dispatched when leaving the screen.
    pub fn into_patch(self) -> ProfilePatch {
        ProfilePatch::diagnostic(self.result())
    }
}

impl Default for DiagnosticQuiz {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(correct: usize) -> DiagnosticQuiz {
        let mut quiz = DiagnosticQuiz::new();
        for (idx, question) in QUESTIONS.iter().enumerate() {
            let option = if idx < correct {
                question.correct_option
            } else {
                (question.correct_option + 1) % question.options.len()
            };
            quiz.answer(idx, option).unwrap();
        }
        quiz
    }

    #[test]
    fn correct_options_are_within_bounds() {
        for question in QUESTIONS.iter() {
            assert!(question.correct_option < question.options.len());
        }
    }

    #[test]
    fn new_quiz_is_unanswered_and_scores_zero() {
        let quiz = DiagnosticQuiz::new();
        assert!(!quiz.is_finished());
        assert_eq!(quiz.score(), Percentage::ZERO);
        assert_eq!(quiz.placement(), CefrLevel::A1);
    }

    #[test]
    fn score_is_twenty_points_per_correct_answer() {
        for correct in 0..=5 {
            assert_eq!(answered(correct).score().value(), correct as u8 * 20);
        }
    }

    #[test]
    fn placement_follows_score_bands() {
        let expected = [
            CefrLevel::A1,
            CefrLevel::A1,
            CefrLevel::A2,
            CefrLevel::B1,
            CefrLevel::B2,
            CefrLevel::C1,
        ];
        for (correct, level) in expected.iter().enumerate() {
            assert_eq!(answered(correct).placement(), *level);
        }
    }

    #[test]
    fn answer_rejects_unknown_question_or_option() {
        let mut quiz = DiagnosticQuiz::new();
        assert!(quiz.answer(5, 0).is_err());
        assert!(quiz.answer(0, 4).is_err());
        assert!(quiz.answers().iter().all(Option::is_none));
    }

    #[test]
    fn answers_can_be_changed() {
        let mut quiz = DiagnosticQuiz::new();
        quiz.answer(0, 0).unwrap();
        quiz.answer(0, QUESTIONS[0].correct_option).unwrap();
        assert_eq!(quiz.correct_answers(), 1);
    }

    #[test]
    fn weak_areas_are_deduplicated() {
        let quiz = answered(0);
        assert_eq!(
            quiz.weak_areas(),
            vec![SkillArea::Grammar, SkillArea::Vocabulary, SkillArea::Reading, SkillArea::Writing]
        );
        assert!(answered(5).weak_areas().is_empty());
    }

    #[test]
    fn into_patch_carries_result() {
        let patch = answered(3).into_patch();
        let result = patch.diagnostic.clone().flatten().unwrap();
        assert_eq!(result.score.value(), 60);
        assert_eq!(result.placement, CefrLevel::B1);
        assert_eq!(patch.changed_fields(), vec!["diagnostic".to_string()]);
    }
}
