//! Forensic deduction — the third in-case phase.
//!
//! Questions are presented one at a time in case order. Submitting an
//! answer records the chosen option index and its correctness, then
//! advances; answering the last question flips the sheet into
//! results-review mode. Review is distinct from completing the phase —
//! the player inspects their answers (with explanations for the wrong
//! ones) and then explicitly finishes.

use serde::{Deserialize, Serialize};

use crate::case::CrimeCase;

/// Result of submitting an answer to the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Recorded; the next question is now presented.
    Advanced { correct: bool },
    /// Recorded the final answer; the sheet is now in review mode.
    ReviewReady { correct: bool },
    /// All questions already answered.
    AlreadyComplete,
    /// Option index outside the current question's options.
    InvalidOption,
}

/// Mutable deduction-phase state, reset on every case selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeductionSheet {
    /// Chosen option index per question, in submission order.
    answers: Vec<usize>,
    /// Parallel correctness flags.
    results: Vec<bool>,
    /// Index of the question currently presented.
    current: usize,
    /// Whether the results review is showing.
    in_review: bool,
}

impl DeductionSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit an option index for the current question.
    pub fn submit(&mut self, case: &CrimeCase, option: usize) -> SubmitOutcome {
        let Some(question) = case.question(self.current) else {
            return SubmitOutcome::AlreadyComplete;
        };
        if option >= question.options.len() {
            return SubmitOutcome::InvalidOption;
        }

        let correct = option == question.correct;
        self.answers.push(option);
        self.results.push(correct);

        if self.answers.len() == case.deduction_questions.len() {
            self.in_review = true;
            SubmitOutcome::ReviewReady { correct }
        } else {
            self.current += 1;
            SubmitOutcome::Advanced { correct }
        }
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn results(&self) -> &[bool] {
        &self.results
    }

    /// Index of the question currently presented.
    pub fn current_question(&self) -> usize {
        self.current
    }

    pub fn in_review(&self) -> bool {
        self.in_review
    }

    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|&&r| r).count()
    }

    pub fn wrong_count(&self) -> usize {
        self.results.iter().filter(|&&r| !r).count()
    }

    /// Advance gate: every question has been answered.
    pub fn is_complete(&self, case: &CrimeCase) -> bool {
        self.answers.len() == case.deduction_questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{AnalysisPoint, DeductionQuestion, Difficulty, TimelineArrow};
    use crate::patterns::PatternKind;

    fn quiz_case() -> CrimeCase {
        CrimeCase {
            id: "quiz".into(),
            title: "Quiz".into(),
            description: "".into(),
            difficulty: Difficulty::Beginner,
            location: "".into(),
            available: true,
            image: "/x.png".into(),
            analysis_points: vec![AnalysisPoint {
                id: 1,
                x: 0.0,
                y: 0.0,
                pattern: PatternKind::Void,
                description: "".into(),
            }],
            timeline_arrows: vec![TimelineArrow {
                id: 1,
                x: 0.0,
                y: 0.0,
                event: "e".into(),
                direction: "→".into(),
            }],
            deduction_questions: vec![
                DeductionQuestion {
                    question: "One?".into(),
                    options: vec!["a".into(), "b".into(), "c".into()],
                    correct: 1,
                    explanation: "x".into(),
                },
                DeductionQuestion {
                    question: "Two?".into(),
                    options: vec!["a".into(), "b".into()],
                    correct: 0,
                    explanation: "y".into(),
                },
            ],
        }
    }

    #[test]
    fn answers_advance_then_review() {
        let case = quiz_case();
        let mut sheet = DeductionSheet::new();
        assert_eq!(sheet.current_question(), 0);

        let outcome = sheet.submit(&case, 1);
        assert_eq!(outcome, SubmitOutcome::Advanced { correct: true });
        assert_eq!(sheet.current_question(), 1);
        assert!(!sheet.in_review());

        let outcome = sheet.submit(&case, 1);
        assert_eq!(outcome, SubmitOutcome::ReviewReady { correct: false });
        assert!(sheet.in_review());
        assert!(sheet.is_complete(&case));
        assert_eq!(sheet.answers(), &[1, 1]);
        assert_eq!(sheet.results(), &[true, false]);
        assert_eq!(sheet.correct_count(), 1);
        assert_eq!(sheet.wrong_count(), 1);
    }

    #[test]
    fn out_of_range_option_rejected() {
        let case = quiz_case();
        let mut sheet = DeductionSheet::new();
        assert_eq!(sheet.submit(&case, 3), SubmitOutcome::InvalidOption);
        assert!(sheet.answers().is_empty());
        assert_eq!(sheet.current_question(), 0);
    }

    #[test]
    fn submit_after_complete_rejected() {
        let case = quiz_case();
        let mut sheet = DeductionSheet::new();
        sheet.submit(&case, 0);
        sheet.submit(&case, 0);
        assert_eq!(sheet.submit(&case, 0), SubmitOutcome::AlreadyComplete);
        assert_eq!(sheet.answers().len(), 2);
    }
}
