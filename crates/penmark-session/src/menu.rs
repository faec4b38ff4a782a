//! Radial and pill menu state.

use penmark_core::Digit;

/// A choice in the radial menu, committed to a single target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RadialChoice {
    /// Commit this digit as the cell's value.
    Value(Digit),
    /// Clear the cell.
    Erase,
}

/// A sub-region of the pill menu, tracked by hover and committed on
/// release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PillChoice {
    /// Commit the pill's digit as a value. Applies only when exactly one
    /// cell is selected.
    Value,
    /// Toggle the pill's digit as a candidate over the selection.
    Candidate,
    /// Toggle the pill's digit as an anti-candidate over the selection.
    AntiCandidate,
    /// Enter candidate-isolation mode seeded with the pill's digit.
    IsolationMode,
}

/// An in-progress pill menu session.
///
/// At most one exists at a time; activation attempts while one is open
/// are ignored until it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillSession {
    /// The digit the pill was opened for.
    pub digit: Digit,
    /// The sub-region currently under the pointer, if any.
    pub hovered: Option<PillChoice>,
}

impl PillSession {
    #[must_use]
    pub(crate) fn new(digit: Digit) -> Self {
        Self {
            digit,
            hovered: None,
        }
    }
}
