//! Immutable session snapshots for the presentation layer.
//!
//! The controller emits a fresh [`SessionSnapshot`] after every handled
//! input event; the frontend treats it as pure input and re-renders
//! from it. Everything observable is here - nothing requires reaching
//! back into the controller mid-render. Snapshots serialize to JSON so
//! non-Rust frontends can consume them unchanged.

use serde::{Deserialize, Serialize};

use bloodcode_logic::patterns::PatternKind;
use bloodcode_logic::phase::Phase;
use bloodcode_logic::scoring::MistakeTally;
use bloodcode_logic::timeline::SequenceVerdict;

use crate::engine::GameSession;

/// Render state of one evidence point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub description: String,
    pub analyzed: bool,
    /// Display label, present once correctly identified.
    pub label: Option<String>,
    /// Pattern tags ruled out on this point (render disabled).
    pub disabled_tags: Vec<String>,
}

/// Render state of one timeline arrow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub direction: String,
    pub revealed: bool,
    /// Event text, exposed only once the arrow is revealed.
    pub event: Option<String>,
}

/// Review line for one answered deduction question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerView {
    pub question: String,
    pub chosen: String,
    pub correct: bool,
    /// Correct option text, present only for wrong answers.
    pub correct_answer: Option<String>,
    /// Explanation, present only for wrong answers.
    pub explanation: Option<String>,
}

/// Complete observable state of a session at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub case_id: Option<String>,
    pub case_title: Option<String>,
    /// Last pattern-selection feedback line, if any.
    pub feedback: Option<String>,

    // Pattern phase
    pub points: Vec<PointView>,
    pub open_point: Option<u32>,
    pub analyzed_count: usize,
    pub point_count: usize,

    // Timeline phase
    pub arrows: Vec<ArrowView>,
    /// Arrow ids in the order they were revealed.
    pub revealed_order: Vec<u32>,
    pub verdict: SequenceVerdict,

    // Deduction phase
    pub current_question: usize,
    pub question_count: usize,
    /// Review lines for answered questions, in submission order.
    pub answers: Vec<AnswerView>,
    pub in_review: bool,

    // Completion
    pub final_rank: Option<String>,
    pub mistakes: MistakeTally,

    /// Whether the explicit phase-advance action is currently enabled.
    pub can_advance: bool,
}

impl SessionSnapshot {
    pub(crate) fn capture(session: &GameSession) -> Self {
        let case = session.current_case();
        let analysis = session.analysis();
        let timeline = session.timeline_board();
        let sheet = session.deduction_sheet();

        let points = case
            .map(|c| {
                c.analysis_points
                    .iter()
                    .map(|p| PointView {
                        id: p.id,
                        x: p.x,
                        y: p.y,
                        description: p.description.clone(),
                        analyzed: analysis.is_analyzed(p.id),
                        label: analysis.label(p.id).map(str::to_string),
                        disabled_tags: PatternKind::ALL
                            .iter()
                            .filter(|k| analysis.is_disabled(p.id, **k))
                            .map(|k| k.tag().to_string())
                            .collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let arrows = case
            .map(|c| {
                c.timeline_arrows
                    .iter()
                    .map(|a| {
                        let revealed = timeline.is_revealed(a.id);
                        ArrowView {
                            id: a.id,
                            x: a.x,
                            y: a.y,
                            direction: a.direction.clone(),
                            revealed,
                            event: revealed.then(|| a.event.clone()),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let answers = case
            .map(|c| {
                sheet
                    .answers()
                    .iter()
                    .zip(sheet.results())
                    .enumerate()
                    .filter_map(|(i, (&chosen, &correct))| {
                        let q = c.question(i)?;
                        Some(AnswerView {
                            question: q.question.clone(),
                            chosen: q.options.get(chosen).cloned().unwrap_or_default(),
                            correct,
                            correct_answer: (!correct)
                                .then(|| q.options.get(q.correct).cloned())
                                .flatten(),
                            explanation: (!correct).then(|| q.explanation.clone()),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let can_advance = match (session.phase(), case) {
            (Phase::Pattern, Some(c)) => analysis.is_complete(c),
            (Phase::Timeline, Some(_)) => timeline.is_complete(),
            (Phase::Deduction, Some(c)) => sheet.is_complete(c),
            _ => false,
        };

        Self {
            phase: session.phase(),
            case_id: case.map(|c| c.id.clone()),
            case_title: case.map(|c| c.title.clone()),
            feedback: session.feedback().map(str::to_string),
            points,
            open_point: analysis.open_point(),
            analyzed_count: analysis.analyzed_count(),
            point_count: case.map(|c| c.analysis_points.len()).unwrap_or(0),
            arrows,
            revealed_order: timeline.order().to_vec(),
            verdict: timeline.verdict(),
            current_question: sheet.current_question(),
            question_count: case.map(|c| c.deduction_questions.len()).unwrap_or(0),
            answers,
            in_review: sheet.in_review(),
            final_rank: session.final_rank().map(str::to_string),
            mistakes: session.mistakes(),
            can_advance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloodcode_logic::patterns::PatternKind;

    #[test]
    fn menu_snapshot_is_empty() {
        let session = GameSession::with_builtin_cases();
        let snap = session.snapshot();
        assert_eq!(snap.phase, Phase::Menu);
        assert!(snap.case_id.is_none());
        assert!(snap.points.is_empty());
        assert!(snap.arrows.is_empty());
        assert!(!snap.can_advance);
    }

    #[test]
    fn pattern_progress_reflected() {
        let mut session = GameSession::with_builtin_cases();
        session.select_case("suburban-shooting");
        session.click_point(1);
        session.choose_pattern(PatternKind::Swipe); // wrong
        session.click_point(1);
        session.choose_pattern(PatternKind::ImpactSpatter); // right

        let snap = session.snapshot();
        assert_eq!(snap.analyzed_count, 1);
        assert_eq!(snap.point_count, 5);
        let p1 = snap.points.iter().find(|p| p.id == 1).unwrap();
        assert!(p1.analyzed);
        assert_eq!(p1.label.as_deref(), Some("Impact Spatter"));
        assert_eq!(p1.disabled_tags, vec!["swipe".to_string()]);
        assert!(!snap.can_advance);
        assert_eq!(snap.mistakes.pattern, 1);
    }

    #[test]
    fn unrevealed_arrow_hides_event_text() {
        let mut session = GameSession::with_builtin_cases();
        session.select_case("suburban-shooting");
        let case = session.current_case().unwrap().clone();
        for p in &case.analysis_points {
            session.click_point(p.id);
            session.choose_pattern(p.pattern);
        }
        session.advance_phase();
        session.click_arrow(1);

        let snap = session.snapshot();
        let a1 = snap.arrows.iter().find(|a| a.id == 1).unwrap();
        let a2 = snap.arrows.iter().find(|a| a.id == 2).unwrap();
        assert!(a1.revealed);
        assert!(a1.event.is_some());
        assert!(!a2.revealed);
        assert!(a2.event.is_none());
        assert_eq!(snap.revealed_order, vec![1]);
    }

    #[test]
    fn review_lines_include_explanations_for_wrong_answers() {
        let mut session = GameSession::with_builtin_cases();
        session.select_case("suburban-shooting");
        let case = session.current_case().unwrap().clone();
        for p in &case.analysis_points {
            session.click_point(p.id);
            session.choose_pattern(p.pattern);
        }
        session.advance_phase();
        for id in 1..=case.timeline_arrows.len() as u32 {
            session.click_arrow(id);
        }
        session.advance_phase();

        // First question wrong, rest right.
        let q0 = &case.deduction_questions[0];
        session.choose_answer((q0.correct + 1) % q0.options.len());
        for q in &case.deduction_questions[1..] {
            session.choose_answer(q.correct);
        }

        let snap = session.snapshot();
        assert!(snap.in_review);
        assert!(snap.can_advance);
        assert_eq!(snap.answers.len(), 3);
        assert!(!snap.answers[0].correct);
        assert!(snap.answers[0].explanation.is_some());
        assert!(snap.answers[0].correct_answer.is_some());
        assert!(snap.answers[1].correct);
        assert!(snap.answers[1].explanation.is_none());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut session = GameSession::with_builtin_cases();
        session.select_case("office-incident");
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"pattern\""));
        assert!(json.contains("office-incident"));
    }
}
