//! Timeline reconstruction — the second in-case phase.
//!
//! Arrow ids encode chronological rank, so a correct reconstruction is
//! exactly the click order `1, 2, ..., N`. The board records the order
//! arrows were revealed in; the moment the last arrow is revealed it
//! checks the whole sequence and records a verdict. An incorrect
//! verdict notes the first position where the order diverges and counts
//! one failed attempt; the reset action then truncates back to the
//! correct prefix so the player retries from the divergence, not from
//! scratch.
//!
//! Toggling an arrow off is the only undo and is always allowed while
//! the verdict is not yet correct; a correct verdict locks the board.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Outcome of a full-sequence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceVerdict {
    /// Not all arrows revealed, or the last check was invalidated.
    Unknown,
    /// Revealed order is exactly `1..=N`.
    Correct,
    /// Order diverges; `first_mismatch` is the earliest bad position.
    Incorrect { first_mismatch: usize },
}

/// Result of toggling an arrow on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Arrow revealed; sequence still incomplete.
    Revealed,
    /// Arrow revealed, completing the set; verdict updated.
    Checked(SequenceVerdict),
    /// Arrow un-revealed; any verdict invalidated.
    Removed,
    /// Board is locked after a correct verdict.
    Locked,
    /// Arrow id not in this case.
    UnknownArrow,
}

/// Mutable timeline-phase state, reset on every case selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineBoard {
    /// Total arrows in the case.
    arrow_count: usize,
    revealed: HashSet<u32>,
    /// Arrow ids in the order they were revealed.
    order: Vec<u32>,
    verdict: SequenceVerdict,
    /// Failed full-sequence checks. The timeline mistake metric; there
    /// is no per-click penalty.
    failed_attempts: u32,
}

impl TimelineBoard {
    pub fn new(arrow_count: usize) -> Self {
        Self {
            arrow_count,
            revealed: HashSet::new(),
            order: Vec::new(),
            verdict: SequenceVerdict::Unknown,
            failed_attempts: 0,
        }
    }

    /// Toggle an arrow. Revealing the final arrow triggers the
    /// full-sequence check; removing any arrow resets the verdict.
    pub fn toggle(&mut self, arrow_id: u32) -> ToggleOutcome {
        if self.verdict == SequenceVerdict::Correct {
            return ToggleOutcome::Locked;
        }
        if arrow_id == 0 || arrow_id as usize > self.arrow_count {
            return ToggleOutcome::UnknownArrow;
        }

        if self.revealed.remove(&arrow_id) {
            self.order.retain(|&id| id != arrow_id);
            self.verdict = SequenceVerdict::Unknown;
            return ToggleOutcome::Removed;
        }

        self.revealed.insert(arrow_id);
        self.order.push(arrow_id);
        if self.revealed.len() == self.arrow_count {
            self.verdict = check_sequence(&self.order);
            if let SequenceVerdict::Incorrect { .. } = self.verdict {
                self.failed_attempts += 1;
            }
            ToggleOutcome::Checked(self.verdict)
        } else {
            ToggleOutcome::Revealed
        }
    }

    /// After an incorrect verdict, keep only the correct prefix (before
    /// the first mismatch) and clear the verdict. No-op otherwise.
    pub fn reset_to_mismatch(&mut self) -> bool {
        let SequenceVerdict::Incorrect { first_mismatch } = self.verdict else {
            return false;
        };
        self.order.truncate(first_mismatch);
        self.revealed = self.order.iter().copied().collect();
        self.verdict = SequenceVerdict::Unknown;
        true
    }

    pub fn verdict(&self) -> SequenceVerdict {
        self.verdict
    }

    pub fn is_revealed(&self, arrow_id: u32) -> bool {
        self.revealed.contains(&arrow_id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Arrow ids in click order.
    pub fn order(&self) -> &[u32] {
        &self.order
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Advance gate: full set revealed and the order is exactly `1..=N`.
    pub fn is_complete(&self) -> bool {
        self.verdict == SequenceVerdict::Correct
    }
}

/// Element-wise check of a complete click order against `1..=N`.
pub fn check_sequence(order: &[u32]) -> SequenceVerdict {
    match order
        .iter()
        .enumerate()
        .position(|(i, &id)| id != i as u32 + 1)
    {
        None => SequenceVerdict::Correct,
        Some(first_mismatch) => SequenceVerdict::Incorrect { first_mismatch },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_reveal_is_correct() {
        let mut board = TimelineBoard::new(3);
        assert_eq!(board.toggle(1), ToggleOutcome::Revealed);
        assert_eq!(board.toggle(2), ToggleOutcome::Revealed);
        assert_eq!(
            board.toggle(3),
            ToggleOutcome::Checked(SequenceVerdict::Correct)
        );
        assert!(board.is_complete());
        assert_eq!(board.failed_attempts(), 0);
    }

    #[test]
    fn inversion_reports_first_mismatch() {
        let mut board = TimelineBoard::new(3);
        board.toggle(2);
        board.toggle(1);
        let outcome = board.toggle(3);
        assert_eq!(
            outcome,
            ToggleOutcome::Checked(SequenceVerdict::Incorrect { first_mismatch: 0 })
        );
        assert_eq!(board.failed_attempts(), 1);
    }

    #[test]
    fn late_inversion_mismatch_index() {
        let mut board = TimelineBoard::new(4);
        for id in [1, 2, 4, 3] {
            board.toggle(id);
        }
        assert_eq!(
            board.verdict(),
            SequenceVerdict::Incorrect { first_mismatch: 2 }
        );
    }

    #[test]
    fn toggle_off_removes_and_invalidates() {
        let mut board = TimelineBoard::new(3);
        board.toggle(2);
        board.toggle(1);
        board.toggle(3); // incorrect verdict
        assert_eq!(board.toggle(3), ToggleOutcome::Removed);
        assert_eq!(board.verdict(), SequenceVerdict::Unknown);
        assert!(!board.is_revealed(3));
        assert_eq!(board.order(), &[2, 1]);
        // Failed attempt tally is not undone by the removal.
        assert_eq!(board.failed_attempts(), 1);
    }

    #[test]
    fn reset_keeps_correct_prefix() {
        let mut board = TimelineBoard::new(4);
        for id in [1, 2, 4, 3] {
            board.toggle(id);
        }
        assert!(board.reset_to_mismatch());
        assert_eq!(board.order(), &[1, 2]);
        assert_eq!(board.revealed_count(), 2);
        assert_eq!(board.verdict(), SequenceVerdict::Unknown);
    }

    #[test]
    fn reset_with_mismatch_at_start_truncates_to_empty() {
        let mut board = TimelineBoard::new(3);
        for id in [2, 1, 3] {
            board.toggle(id);
        }
        assert!(board.reset_to_mismatch());
        assert!(board.order().is_empty());
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn reset_is_noop_without_incorrect_verdict() {
        let mut board = TimelineBoard::new(2);
        board.toggle(1);
        assert!(!board.reset_to_mismatch());
        assert_eq!(board.order(), &[1]);
    }

    #[test]
    fn correct_verdict_locks_board() {
        let mut board = TimelineBoard::new(2);
        board.toggle(1);
        board.toggle(2);
        assert_eq!(board.toggle(1), ToggleOutcome::Locked);
        assert_eq!(board.toggle(2), ToggleOutcome::Locked);
        assert!(board.is_revealed(1));
    }

    #[test]
    fn unknown_arrow_is_noop() {
        let mut board = TimelineBoard::new(2);
        assert_eq!(board.toggle(0), ToggleOutcome::UnknownArrow);
        assert_eq!(board.toggle(7), ToggleOutcome::UnknownArrow);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn retry_after_reset_can_succeed() {
        let mut board = TimelineBoard::new(3);
        for id in [1, 3, 2] {
            board.toggle(id);
        }
        assert_eq!(board.failed_attempts(), 1);
        board.reset_to_mismatch();
        board.toggle(2);
        board.toggle(3);
        assert!(board.is_complete());
        assert_eq!(board.failed_attempts(), 1);
    }

    #[test]
    fn check_sequence_pure() {
        assert_eq!(check_sequence(&[1, 2, 3]), SequenceVerdict::Correct);
        assert_eq!(
            check_sequence(&[2, 1, 3]),
            SequenceVerdict::Incorrect { first_mismatch: 0 }
        );
        assert_eq!(
            check_sequence(&[1, 3, 2]),
            SequenceVerdict::Incorrect { first_mismatch: 1 }
        );
        assert_eq!(check_sequence(&[]), SequenceVerdict::Correct);
    }
}
