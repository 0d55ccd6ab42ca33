//! Pattern identification — the first in-case phase.
//!
//! The player opens an evidence point, then picks a pattern kind from
//! the selector. A correct pick marks the point analyzed and labels it;
//! a wrong pick is remembered per point so the same wrong kind cannot
//! be picked there again, and bumps the running error count. The phase
//! is complete when every point in the case is analyzed.
//!
//! ```
//! use bloodcode_logic::analysis::{AnalysisBoard, IdentificationOutcome};
//! use bloodcode_logic::patterns::PatternKind;
//! # use bloodcode_logic::casebook;
//! let case = &casebook::builtin_cases()[0];
//! let mut board = AnalysisBoard::new();
//! assert!(board.open(case, 1));
//! let outcome = board.choose(case, PatternKind::ImpactSpatter);
//! assert!(matches!(outcome, IdentificationOutcome::Correct { .. }));
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::case::CrimeCase;
use crate::patterns::PatternKind;

/// Result of choosing a pattern kind for the currently open point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentificationOutcome {
    /// Right kind: the point is now analyzed and labeled.
    Correct {
        point_id: u32,
        label: &'static str,
        feedback: &'static str,
    },
    /// Wrong kind: recorded against the point, error count bumped.
    Incorrect { point_id: u32, feedback: String },
    /// No point is open; nothing to identify.
    NoOpenPoint,
    /// The chosen kind was already tried (and wrong) on this point.
    KindDisabled { point_id: u32 },
}

/// Mutable pattern-phase state, reset on every case selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisBoard {
    /// Points correctly identified so far.
    analyzed: HashSet<u32>,
    /// Display label assigned to each analyzed point.
    labels: HashMap<u32, String>,
    /// Wrong kinds previously tried, per point. Persists for the case.
    wrong: HashMap<u32, HashSet<PatternKind>>,
    /// Total wrong selections across all points, uncapped.
    errors: u32,
    /// Point the selector is currently open on.
    open_point: Option<u32>,
}

impl AnalysisBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the selector on a point. Returns false (no state change) if
    /// the point does not exist in the case or is already analyzed.
    pub fn open(&mut self, case: &CrimeCase, point_id: u32) -> bool {
        if case.point(point_id).is_none() || self.analyzed.contains(&point_id) {
            return false;
        }
        self.open_point = Some(point_id);
        true
    }

    /// Close the selector without choosing.
    pub fn close(&mut self) {
        self.open_point = None;
    }

    /// Choose a pattern kind for the open point. Always closes the
    /// selector on a real attempt, correct or not.
    pub fn choose(&mut self, case: &CrimeCase, kind: PatternKind) -> IdentificationOutcome {
        let Some(point_id) = self.open_point else {
            return IdentificationOutcome::NoOpenPoint;
        };
        let Some(point) = case.point(point_id) else {
            // Stale open point from a different case; drop it.
            self.open_point = None;
            return IdentificationOutcome::NoOpenPoint;
        };
        if self.is_disabled(point_id, kind) {
            return IdentificationOutcome::KindDisabled { point_id };
        }

        self.open_point = None;
        if point.pattern == kind {
            let info = kind.info();
            self.analyzed.insert(point_id);
            self.labels.insert(point_id, info.name.to_string());
            IdentificationOutcome::Correct {
                point_id,
                label: info.name,
                feedback: info.feedback,
            }
        } else {
            self.wrong.entry(point_id).or_default().insert(kind);
            self.errors += 1;
            IdentificationOutcome::Incorrect {
                point_id,
                feedback: comparison_feedback(kind, point.pattern),
            }
        }
    }

    /// Whether this kind was already tried (and wrong) on this point.
    pub fn is_disabled(&self, point_id: u32, kind: PatternKind) -> bool {
        self.wrong
            .get(&point_id)
            .is_some_and(|set| set.contains(&kind))
    }

    pub fn is_analyzed(&self, point_id: u32) -> bool {
        self.analyzed.contains(&point_id)
    }

    pub fn analyzed_count(&self) -> usize {
        self.analyzed.len()
    }

    pub fn label(&self, point_id: u32) -> Option<&str> {
        self.labels.get(&point_id).map(String::as_str)
    }

    pub fn open_point(&self) -> Option<u32> {
        self.open_point
    }

    /// Total wrong pattern selections this case.
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    /// Advance gate: every point in the case is analyzed.
    pub fn is_complete(&self, case: &CrimeCase) -> bool {
        self.analyzed.len() == case.analysis_points.len()
    }
}

/// Feedback comparing the chosen (wrong) kind against the correct one.
pub fn comparison_feedback(chosen: PatternKind, correct: PatternKind) -> String {
    let chosen_info = chosen.info();
    let correct_info = correct.info();
    format!(
        "Incorrect. \"{}\" is characterized by {}, but this pattern shows {}. Look for: {}.",
        chosen_info.name,
        chosen_info.description.to_lowercase(),
        correct_info.description.to_lowercase(),
        correct_info.implication.to_lowercase(),
    )
}
