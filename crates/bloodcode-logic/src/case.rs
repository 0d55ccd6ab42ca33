//! Case data model and structural validation.
//!
//! A [`CrimeCase`] is an immutable bundle of everything one playthrough
//! needs: the evidence points for the pattern phase, the motion arrows
//! for the timeline phase, and the questions for the deduction phase.
//! Cases are authored in Rust ([`crate::casebook`]) or come in from JSON
//! case packs; either way they must pass [`validate_case`] before use.
//!
//! # Invariant
//!
//! Timeline arrow ids double as chronological ranks: arrow `N` is the
//! N-th event. Sequence checking compares the player's click order
//! against the ascending run `1..=N`, so a case whose arrow ids are not
//! exactly that run is structurally broken and rejected at validation.

use serde::{Deserialize, Serialize};

use crate::patterns::PatternKind;

/// Case difficulty tier shown on the case-selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

/// A fixed evidence location with one correct pattern kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisPoint {
    /// Unique within the case.
    pub id: u32,
    /// Normalized horizontal position (percent of scene width).
    pub x: f32,
    /// Normalized vertical position (percent of scene height).
    pub y: f32,
    /// The pattern kind the player must identify here.
    pub pattern: PatternKind,
    /// Human-readable description of the stain.
    pub description: String,
}

/// A fixed scene location whose id encodes its chronological rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineArrow {
    /// Unique within the case; arrow `N` is the N-th event.
    pub id: u32,
    pub x: f32,
    pub y: f32,
    /// What happened at this moment.
    pub event: String,
    /// Directional glyph rendered on the marker.
    pub direction: String,
}

/// A multiple-choice question posed after the timeline is reconstructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionQuestion {
    pub question: String,
    /// Ordered answer options; at least two.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct: usize,
    /// Shown on incorrect answers and in the results review.
    pub explanation: String,
}

/// An immutable crime-scene case definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub location: String,
    /// Unavailable cases are listed but cannot be started.
    pub available: bool,
    /// Background image reference, resolved by the asset layer.
    pub image: String,
    pub analysis_points: Vec<AnalysisPoint>,
    pub timeline_arrows: Vec<TimelineArrow>,
    pub deduction_questions: Vec<DeductionQuestion>,
}

impl CrimeCase {
    pub fn point(&self, point_id: u32) -> Option<&AnalysisPoint> {
        self.analysis_points.iter().find(|p| p.id == point_id)
    }

    pub fn arrow(&self, arrow_id: u32) -> Option<&TimelineArrow> {
        self.timeline_arrows.iter().find(|a| a.id == arrow_id)
    }

    pub fn question(&self, index: usize) -> Option<&DeductionQuestion> {
        self.deduction_questions.get(index)
    }
}

/// Structural problem found in a case definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    EmptyId,
    EmptyTitle,
    NoAnalysisPoints,
    NoTimelineArrows,
    NoDeductionQuestions,
    /// An analysis point id appears more than once.
    DuplicatePointId(u32),
    /// Arrow ids must be exactly the run 1..=N.
    ArrowIdsNotSequential,
    /// Two arrows occupy the same scene position.
    ArrowsSharePosition { first: u32, second: u32 },
    /// A question's correct index is outside its option list.
    CorrectIndexOutOfRange { question: usize, correct: usize },
    /// A question has fewer than two options.
    TooFewOptions { question: usize },
    /// A question, option, or explanation string is empty.
    EmptyQuestionText { question: usize },
}

/// Validate a case definition, returning all errors found.
pub fn validate_case(case: &CrimeCase) -> Vec<CaseError> {
    let mut errors = Vec::new();

    if case.id.trim().is_empty() {
        errors.push(CaseError::EmptyId);
    }
    if case.title.trim().is_empty() {
        errors.push(CaseError::EmptyTitle);
    }
    if case.analysis_points.is_empty() {
        errors.push(CaseError::NoAnalysisPoints);
    }
    if case.timeline_arrows.is_empty() {
        errors.push(CaseError::NoTimelineArrows);
    }
    if case.deduction_questions.is_empty() {
        errors.push(CaseError::NoDeductionQuestions);
    }

    let mut seen = std::collections::HashSet::new();
    for point in &case.analysis_points {
        if !seen.insert(point.id) {
            errors.push(CaseError::DuplicatePointId(point.id));
        }
    }

    // Arrow id N must be the N-th event; anything else breaks sequence checking.
    let sequential = case
        .timeline_arrows
        .iter()
        .enumerate()
        .all(|(i, a)| a.id == i as u32 + 1);
    if !case.timeline_arrows.is_empty() && !sequential {
        errors.push(CaseError::ArrowIdsNotSequential);
    }

    // Overlapping markers are unclickable; positions must be distinct.
    for (i, a) in case.timeline_arrows.iter().enumerate() {
        for b in &case.timeline_arrows[i + 1..] {
            if a.x == b.x && a.y == b.y {
                errors.push(CaseError::ArrowsSharePosition {
                    first: a.id,
                    second: b.id,
                });
            }
        }
    }

    for (i, q) in case.deduction_questions.iter().enumerate() {
        if q.options.len() < 2 {
            errors.push(CaseError::TooFewOptions { question: i });
        }
        if q.correct >= q.options.len() {
            errors.push(CaseError::CorrectIndexOutOfRange {
                question: i,
                correct: q.correct,
            });
        }
        if q.question.trim().is_empty()
            || q.explanation.trim().is_empty()
            || q.options.iter().any(|o| o.trim().is_empty())
        {
            errors.push(CaseError::EmptyQuestionText { question: i });
        }
    }

    errors
}
