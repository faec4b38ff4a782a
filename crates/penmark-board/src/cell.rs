//! The per-cell record.

use penmark_core::{Digit, DigitSet};

/// The state of one cell on the board.
///
/// Invariants, maintained by the mutation operations in
/// [`Board`](crate::Board):
///
/// - if `value` is set, `candidates` and `anti_candidates` are both empty;
/// - a digit is in at most one of `candidates` / `anti_candidates`;
/// - if `is_given`, `value` never changes after the board is loaded.
///
/// `hidden_single` is a derived annotation owned by the assistance engine;
/// it is cleared before every recomputation and whenever the assistance mode
/// is deactivated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The committed digit, or `None` for an empty cell.
    pub value: Option<Digit>,
    /// Whether this is a clue cell fixed at load time.
    pub is_given: bool,
    /// Digits the player marks as still possible.
    pub candidates: DigitSet,
    /// Digits the player marks as ruled out.
    pub anti_candidates: DigitSet,
    /// Derived: the digit this cell must hold per hidden-single analysis.
    pub hidden_single: Option<Digit>,
}

impl Cell {
    /// An empty, non-given cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: None,
            is_given: false,
            candidates: DigitSet::EMPTY,
            anti_candidates: DigitSet::EMPTY,
            hidden_single: None,
        }
    }

    /// A given cell fixed to `digit`.
    #[must_use]
    pub const fn given(digit: Digit) -> Self {
        Self {
            value: Some(digit),
            is_given: true,
            candidates: DigitSet::EMPTY,
            anti_candidates: DigitSet::EMPTY,
            hidden_single: None,
        }
    }

    /// Returns whether the cell has no committed value.
    #[must_use]
    pub const fn is_unvalued(&self) -> bool {
        self.value.is_none()
    }

    /// Returns whether the cell carries any player input at all.
    #[must_use]
    pub fn has_input(&self) -> bool {
        !self.is_given
            && (self.value.is_some()
                || !self.candidates.is_empty()
                || !self.anti_candidates.is_empty())
    }

    /// Checks the per-cell invariants.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let marks_disjoint = (self.candidates & self.anti_candidates).is_empty();
        let value_excludes_marks = self.value.is_none()
            || (self.candidates.is_empty() && self.anti_candidates.is_empty());
        marks_disjoint && value_excludes_marks
    }

    /// Returns the mark set addressed by `kind`.
    #[must_use]
    pub const fn marks(&self, kind: MarkKind) -> DigitSet {
        match kind {
            MarkKind::Candidate => self.candidates,
            MarkKind::AntiCandidate => self.anti_candidates,
        }
    }

    pub(crate) const fn marks_mut(&mut self, kind: MarkKind) -> &mut DigitSet {
        match kind {
            MarkKind::Candidate => &mut self.candidates,
            MarkKind::AntiCandidate => &mut self.anti_candidates,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

/// Which of the two mark sets an operation targets.
///
/// A digit lives in at most one set at a time; toggling it into one removes
/// it from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MarkKind {
    /// A pencil mark: the digit is still considered possible.
    Candidate,
    /// An elimination mark: the digit is considered ruled out.
    AntiCandidate,
}

impl MarkKind {
    /// Returns the other mark kind.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Candidate => Self::AntiCandidate,
            Self::AntiCandidate => Self::Candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_holds_invariants() {
        let cell = Cell::empty();
        assert!(cell.invariants_hold());
        assert!(cell.is_unvalued());
        assert!(!cell.has_input());
    }

    #[test]
    fn given_cell_has_no_input() {
        let cell = Cell::given(Digit::D5);
        assert!(cell.invariants_hold());
        assert!(!cell.has_input());
        assert_eq!(cell.value, Some(Digit::D5));
    }

    #[test]
    fn overlapping_marks_break_invariants() {
        let mut cell = Cell::empty();
        cell.candidates.insert(Digit::D3);
        cell.anti_candidates.insert(Digit::D3);
        assert!(!cell.invariants_hold());
    }

    #[test]
    fn value_with_marks_breaks_invariants() {
        let mut cell = Cell::empty();
        cell.value = Some(Digit::D1);
        cell.candidates.insert(Digit::D2);
        assert!(!cell.invariants_hold());
    }

    #[test]
    fn mark_kind_opposite_round_trips() {
        assert_eq!(MarkKind::Candidate.opposite(), MarkKind::AntiCandidate);
        assert_eq!(MarkKind::Candidate.opposite().opposite(), MarkKind::Candidate);
    }
}
