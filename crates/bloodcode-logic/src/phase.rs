//! The five mutually exclusive stages of a case playthrough.
//!
//! Progression is strictly linear: Menu → Pattern → Timeline →
//! Deduction → Complete, with Menu reachable again from any in-case
//! phase (abort) or from Complete (restart). Each forward step is gated
//! by its phase's completion predicate, which the session controller
//! checks; this module only encodes the shape of the machine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menu,
    Pattern,
    Timeline,
    Deduction,
    Complete,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Menu,
        Phase::Pattern,
        Phase::Timeline,
        Phase::Deduction,
        Phase::Complete,
    ];

    /// Whether a case is active in this phase.
    pub fn is_in_case(&self) -> bool {
        !matches!(self, Phase::Menu)
    }

    /// The next phase in the forward progression, if any.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Menu => Some(Phase::Pattern),
            Phase::Pattern => Some(Phase::Timeline),
            Phase::Timeline => Some(Phase::Deduction),
            Phase::Deduction => Some(Phase::Complete),
            Phase::Complete => None,
        }
    }

    /// Uppercase label for headers and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Menu => "MENU",
            Phase::Pattern => "PATTERN",
            Phase::Timeline => "TIMELINE",
            Phase::Deduction => "DEDUCTION",
            Phase::Complete => "COMPLETE",
        }
    }
}
