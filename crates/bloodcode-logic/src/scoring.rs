//! Final rank and mistake tallying.
//!
//! Rank depends only on the number of correct deduction answers.
//! Pattern and timeline mistakes are tallied for display but never
//! feed into the rank.

use serde::{Deserialize, Serialize};

/// Rank labels indexed by correct deduction answers, worst first.
/// Counts beyond the table clamp to the last entry.
pub const RANKS: [&str; 4] = [
    "Trace Architect",
    "Clinical Analyst",
    "Blood Whisperer",
    "Void Walker",
];

/// Map a correct-answer count to its rank label.
pub fn rank_for(correct_answers: usize) -> &'static str {
    RANKS[correct_answers.min(RANKS.len() - 1)]
}

/// Per-phase mistake counts shown on the completion screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakeTally {
    /// Wrong pattern selections across all points.
    pub pattern: u32,
    /// Failed full-sequence timeline checks.
    pub timeline: u32,
    /// Incorrect deduction answers.
    pub deduction: u32,
}

impl MistakeTally {
    /// Combined figure. Informational only.
    pub fn total(&self) -> u32 {
        self.pattern + self.timeline + self.deduction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_table() {
        assert_eq!(rank_for(0), "Trace Architect");
        assert_eq!(rank_for(1), "Clinical Analyst");
        assert_eq!(rank_for(2), "Blood Whisperer");
        assert_eq!(rank_for(3), "Void Walker");
    }

    #[test]
    fn rank_clamps_beyond_table() {
        assert_eq!(rank_for(4), "Void Walker");
        assert_eq!(rank_for(100), "Void Walker");
    }

    #[test]
    fn tally_total() {
        let tally = MistakeTally {
            pattern: 2,
            timeline: 1,
            deduction: 3,
        };
        assert_eq!(tally.total(), 6);
        assert_eq!(MistakeTally::default().total(), 0);
    }
}
