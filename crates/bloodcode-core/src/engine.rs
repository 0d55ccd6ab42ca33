//! Game session controller - main entry point for running a playthrough.
//!
//! A [`GameSession`] owns every piece of mutable session state and is
//! the only thing that mutates it. The presentation layer forwards
//! discrete input events into the handler methods and re-renders from
//! [`GameSession::snapshot`] after each one; it holds no game state of
//! its own.
//!
//! All handlers run synchronously to completion. Invalid actions
//! (wrong phase, unknown ids, disabled controls) are rejected here as
//! logged no-ops rather than trusting the frontend to disable the
//! control.

use bloodcode_logic::analysis::{AnalysisBoard, IdentificationOutcome};
use bloodcode_logic::case::CrimeCase;
use bloodcode_logic::casebook;
use bloodcode_logic::deduction::{DeductionSheet, SubmitOutcome};
use bloodcode_logic::patterns::PatternKind;
use bloodcode_logic::phase::Phase;
use bloodcode_logic::scoring::{self, MistakeTally};
use bloodcode_logic::timeline::{TimelineBoard, ToggleOutcome};

use crate::snapshot::SessionSnapshot;

/// The game session controller.
pub struct GameSession {
    /// Immutable case tables this session can play.
    cases: Vec<CrimeCase>,
    /// Current phase of the playthrough.
    phase: Phase,
    /// Selected case id; `None` while in the menu before any selection.
    case_id: Option<String>,
    /// Pattern-phase state.
    analysis: AnalysisBoard,
    /// Timeline-phase state.
    timeline: TimelineBoard,
    /// Deduction-phase state.
    deduction: DeductionSheet,
    /// Last feedback line from a pattern selection.
    feedback: Option<String>,
    /// Final rank, set exactly once at deduction completion.
    final_rank: Option<&'static str>,
}

impl GameSession {
    /// Create a session over an explicit set of cases.
    pub fn new(cases: Vec<CrimeCase>) -> Self {
        Self {
            cases,
            phase: Phase::Menu,
            case_id: None,
            analysis: AnalysisBoard::new(),
            timeline: TimelineBoard::new(0),
            deduction: DeductionSheet::new(),
            feedback: None,
            final_rank: None,
        }
    }

    /// Create a session over the built-in casebook.
    pub fn with_builtin_cases() -> Self {
        Self::new(casebook::builtin_cases())
    }

    // ── Input event handlers ────────────────────────────────────────────

    /// Select a case from the menu (or start over from any phase).
    /// Resets all session state atomically, then enters the pattern
    /// phase. Unknown or unavailable case ids are no-ops.
    pub fn select_case(&mut self, case_id: &str) -> bool {
        let Some(case) = casebook::find_case(&self.cases, case_id) else {
            log::warn!("select_case: unknown case {:?}", case_id);
            return false;
        };
        if !case.available {
            log::warn!("select_case: case {:?} is not available", case_id);
            return false;
        }

        let arrow_count = case.timeline_arrows.len();
        log::info!("case {:?} selected, entering PATTERN phase", case_id);
        self.case_id = Some(case_id.to_string());
        self.analysis = AnalysisBoard::new();
        self.timeline = TimelineBoard::new(arrow_count);
        self.deduction = DeductionSheet::new();
        self.feedback = None;
        self.final_rank = None;
        self.phase = Phase::Pattern;
        true
    }

    /// Click an evidence point: opens the pattern selector on it and
    /// clears any stale feedback. Analyzed or unknown points are no-ops.
    pub fn click_point(&mut self, point_id: u32) {
        if self.phase != Phase::Pattern {
            log::warn!("click_point: not in PATTERN phase");
            return;
        }
        let Some(case) = self.current_case().cloned() else {
            return;
        };
        if self.analysis.open(&case, point_id) {
            self.feedback = None;
            log::debug!("selector opened on point {}", point_id);
        } else {
            log::warn!("click_point: point {} unknown or already analyzed", point_id);
        }
    }

    /// Close the pattern selector without choosing.
    pub fn close_selector(&mut self) {
        self.analysis.close();
    }

    /// Choose a pattern kind for the open point.
    pub fn choose_pattern(&mut self, kind: PatternKind) {
        if self.phase != Phase::Pattern {
            log::warn!("choose_pattern: not in PATTERN phase");
            return;
        }
        let Some(case) = self.current_case().cloned() else {
            return;
        };
        match self.analysis.choose(&case, kind) {
            IdentificationOutcome::Correct {
                point_id, feedback, ..
            } => {
                log::info!(
                    "point {} identified as {} ({}/{})",
                    point_id,
                    kind.tag(),
                    self.analysis.analyzed_count(),
                    case.analysis_points.len()
                );
                self.feedback = Some(feedback.to_string());
            }
            IdentificationOutcome::Incorrect { point_id, feedback } => {
                log::info!(
                    "point {} wrong selection {} (errors={})",
                    point_id,
                    kind.tag(),
                    self.analysis.error_count()
                );
                self.feedback = Some(feedback);
            }
            IdentificationOutcome::KindDisabled { point_id } => {
                log::warn!(
                    "choose_pattern: {} already ruled out on point {}",
                    kind.tag(),
                    point_id
                );
            }
            IdentificationOutcome::NoOpenPoint => {
                log::warn!("choose_pattern: no point open");
            }
        }
    }

    /// Toggle a timeline arrow. Revealing the last arrow triggers the
    /// automatic full-sequence check.
    pub fn click_arrow(&mut self, arrow_id: u32) {
        if self.phase != Phase::Timeline {
            log::warn!("click_arrow: not in TIMELINE phase");
            return;
        }
        match self.timeline.toggle(arrow_id) {
            ToggleOutcome::Checked(verdict) => {
                log::info!("full sequence checked: {:?}", verdict);
            }
            ToggleOutcome::Locked => {
                log::warn!("click_arrow: timeline locked after correct verdict");
            }
            ToggleOutcome::UnknownArrow => {
                log::warn!("click_arrow: unknown arrow {}", arrow_id);
            }
            ToggleOutcome::Revealed | ToggleOutcome::Removed => {
                log::debug!(
                    "arrow {} toggled, {} revealed",
                    arrow_id,
                    self.timeline.revealed_count()
                );
            }
        }
    }

    /// After an incorrect verdict, truncate the reconstruction back to
    /// the correct prefix for a retry from the point of divergence.
    pub fn reset_timeline(&mut self) {
        if self.phase != Phase::Timeline {
            log::warn!("reset_timeline: not in TIMELINE phase");
            return;
        }
        if self.timeline.reset_to_mismatch() {
            log::info!(
                "timeline reset to correct prefix of {} arrows",
                self.timeline.revealed_count()
            );
        } else {
            log::warn!("reset_timeline: no incorrect verdict to reset from");
        }
    }

    /// Submit an answer for the current deduction question.
    pub fn choose_answer(&mut self, option: usize) {
        if self.phase != Phase::Deduction {
            log::warn!("choose_answer: not in DEDUCTION phase");
            return;
        }
        let Some(case) = self.current_case().cloned() else {
            return;
        };
        match self.deduction.submit(&case, option) {
            SubmitOutcome::Advanced { correct } => {
                log::debug!("answer recorded (correct={})", correct);
            }
            SubmitOutcome::ReviewReady { correct } => {
                log::info!(
                    "all questions answered (correct={}, {}/{}), showing review",
                    correct,
                    self.deduction.correct_count(),
                    case.deduction_questions.len()
                );
            }
            SubmitOutcome::AlreadyComplete => {
                log::warn!("choose_answer: questionnaire already complete");
            }
            SubmitOutcome::InvalidOption => {
                log::warn!("choose_answer: option {} out of range", option);
            }
        }
    }

    /// Explicit advance action. Moves to the next phase only when the
    /// current phase's completion gate is satisfied. The deduction →
    /// complete step computes the final rank exactly once.
    pub fn advance_phase(&mut self) {
        let Some(case) = self.current_case().cloned() else {
            log::warn!("advance_phase: no case selected");
            return;
        };
        let gate_open = match self.phase {
            Phase::Pattern => self.analysis.is_complete(&case),
            Phase::Timeline => self.timeline.is_complete(),
            Phase::Deduction => self.deduction.is_complete(&case),
            Phase::Menu | Phase::Complete => false,
        };
        if !gate_open {
            log::warn!("advance_phase: {} gate not satisfied", self.phase.label());
            return;
        }
        if self.phase == Phase::Deduction {
            let rank = scoring::rank_for(self.deduction.correct_count());
            self.final_rank = Some(rank);
            log::info!(
                "case {:?} complete: rank {:?}, {} total mistakes",
                case.id,
                rank,
                self.mistakes().total()
            );
        }
        // next() is Some for every gated phase above.
        if let Some(next) = self.phase.next() {
            log::info!("phase {} -> {}", self.phase.label(), next.label());
            self.phase = next;
        }
    }

    /// Return to the case menu from any in-case phase. State is left
    /// in place and reset lazily by the next case selection.
    pub fn return_to_menu(&mut self) {
        if !self.phase.is_in_case() {
            log::warn!("return_to_menu: already in menu");
            return;
        }
        log::info!("returning to menu from {}", self.phase.label());
        self.phase = Phase::Menu;
    }

    // ── Observers ───────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The selected case's definition, if one is selected and valid.
    pub fn current_case(&self) -> Option<&CrimeCase> {
        let id = self.case_id.as_deref()?;
        casebook::find_case(&self.cases, id)
    }

    /// All cases this session can play, in menu order.
    pub fn cases(&self) -> &[CrimeCase] {
        &self.cases
    }

    pub fn final_rank(&self) -> Option<&'static str> {
        self.final_rank
    }

    /// Per-phase mistake tally. Informational; never feeds the rank.
    pub fn mistakes(&self) -> MistakeTally {
        MistakeTally {
            pattern: self.analysis.error_count(),
            timeline: self.timeline.failed_attempts(),
            deduction: self.deduction.wrong_count() as u32,
        }
    }

    pub(crate) fn analysis(&self) -> &AnalysisBoard {
        &self.analysis
    }

    pub(crate) fn timeline_board(&self) -> &TimelineBoard {
        &self.timeline
    }

    pub(crate) fn deduction_sheet(&self) -> &DeductionSheet {
        &self.deduction
    }

    pub(crate) fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Immutable view of every observable field, emitted for the
    /// presentation layer after each handled event.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_builtin_cases()
    }
}
