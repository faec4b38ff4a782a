//! The 81-cell board and its mutation operations.

use penmark_core::{CellIndex, CellSet, Digit, peers};

use crate::{
    cell::{Cell, MarkKind},
    puzzle::{Puzzle, Solution},
};

/// Whether a mutation operation actually changed the board.
///
/// Committing actions that answer [`Applied::No`] never produce a history
/// snapshot, keeping the undo stack free of no-op entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Applied {
    /// At least one cell changed.
    Yes,
    /// Nothing changed.
    No,
}

impl Applied {
    fn from_changed(changed: bool) -> Self {
        if changed { Self::Yes } else { Self::No }
    }
}

/// Error from a single-target mutation.
///
/// The interaction layer treats these as silent no-ops; they are errors only
/// so that callers cannot forget to consider the rejected case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MutationError {
    /// The target cell is a given clue and rejects all mutation.
    #[display("cannot modify a given cell")]
    GivenCell,
}

/// One pass of the chained naked-singles solve: the cells committed
/// simultaneously in that pass.
///
/// The renderer animates passes in order; the session records one history
/// snapshot per pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvePass {
    /// Cells committed in this pass, ascending by index.
    pub solved: Vec<CellIndex>,
}

/// A deep, independent copy of the whole board, used for undo/redo.
///
/// `Cell` is a value type, so cloning the array is the whole snapshot
/// strategy: O(81) per snapshot, bounded by the user input rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    cells: [Cell; 81],
}

/// The board: 81 cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Board {
    /// Builds a fresh board from a parsed puzzle. Clue digits become given
    /// cells; everything else starts empty.
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let mut cells = [Cell::empty(); 81];
        for (cell, given) in cells.iter_mut().zip(&puzzle.givens) {
            if let Some(digit) = *given {
                *cell = Cell::given(digit);
            }
        }
        Self { cells }
    }

    /// Returns the cell at `index`.
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index.as_usize()]
    }

    /// Read-only view of all 81 cells, row-major. This is the rendering
    /// contract surface; the core makes no assumption about how it is drawn.
    #[must_use]
    pub fn cells(&self) -> &[Cell; 81] {
        &self.cells
    }

    /// Takes a value-type snapshot of the whole board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot { cells: self.cells }
    }

    /// Restores the board from a snapshot, bit for bit.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        self.cells = snapshot.cells;
    }

    fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        &mut self.cells[index.as_usize()]
    }

    /// Returns whether any peer of `index` holds `digit` as a committed
    /// value. This is the clash guard for candidate marks.
    #[must_use]
    pub fn peer_value_clash(&self, index: CellIndex, digit: Digit) -> bool {
        peers(index)
            .all
            .iter()
            .any(|peer| self.cell(peer).value == Some(digit))
    }

    /// Removes `digit` from both mark sets of every peer of `index`.
    fn eliminate_from_peers(&mut self, index: CellIndex, digit: Digit) {
        for peer in peers(index).all {
            let cell = self.cell_mut(peer);
            cell.candidates.remove(digit);
            cell.anti_candidates.remove(digit);
        }
    }

    /// Commits `digit` as the value of `index`.
    ///
    /// Clears both mark sets on the cell and eliminates `digit` from the
    /// marks of every peer. Setting the value a cell already holds is a
    /// no-op ([`Applied::No`], no snapshot).
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::GivenCell`] if the cell is a given.
    pub fn set_value(&mut self, index: CellIndex, digit: Digit) -> Result<Applied, MutationError> {
        let cell = self.cell_mut(index);
        if cell.is_given {
            return Err(MutationError::GivenCell);
        }
        if cell.value == Some(digit) {
            return Ok(Applied::No);
        }
        cell.value = Some(digit);
        cell.candidates.clear();
        cell.anti_candidates.clear();
        self.eliminate_from_peers(index, digit);
        log::debug!("set {index} = {digit}");
        Ok(Applied::Yes)
    }

    /// Clears the value and both mark sets of `index`.
    ///
    /// Callers batch multiple erases into one logical action and snapshot
    /// once if any of them applied.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::GivenCell`] if the cell is a given.
    pub fn erase(&mut self, index: CellIndex) -> Result<Applied, MutationError> {
        let cell = self.cell_mut(index);
        if cell.is_given {
            return Err(MutationError::GivenCell);
        }
        let changed = cell.value.is_some()
            || !cell.candidates.is_empty()
            || !cell.anti_candidates.is_empty();
        cell.value = None;
        cell.candidates.clear();
        cell.anti_candidates.clear();
        Ok(Applied::from_changed(changed))
    }

    /// Toggles `digit` in the `kind` mark set of every applicable cell in
    /// `targets`.
    ///
    /// Applicable cells are non-given and value-empty. The digit is first
    /// removed from the opposite set, then toggled in the target set.
    /// Candidate additions are skipped for cells where a peer already holds
    /// `digit` as a value (the clash guard); anti-candidate toggles have no
    /// guard. Skipped cells do not stop the rest of the batch.
    pub fn toggle_mark(&mut self, targets: CellSet, digit: Digit, kind: MarkKind) -> Applied {
        let mut changed = false;
        for index in targets {
            let clash = kind.is_candidate() && self.peer_value_clash(index, digit);
            let cell = self.cell_mut(index);
            if cell.is_given || cell.value.is_some() || clash {
                continue;
            }
            cell.marks_mut(kind.opposite()).remove(digit);
            let marks = cell.marks_mut(kind);
            if !marks.remove(digit) {
                marks.insert(digit);
            }
            // Either branch of the toggle is a modification.
            changed = true;
        }
        Applied::from_changed(changed)
    }

    /// The "pickup" gesture: cycles `digit` across all applicable cells in
    /// `targets` as one uniform transition.
    ///
    /// Each applicable cell is in exactly one class: has the digit as a
    /// candidate, as an anti-candidate, or as neither. A single action is
    /// chosen by priority (any cell with neither wins "set candidate",
    /// clash-guarded per cell, else any candidate wins "move to
    /// anti-candidate", else any anti-candidate wins "clear") and applied
    /// only to cells in the matching pre-state. Repeated invocation
    /// converges a mixed selection to one state in at most three steps.
    pub fn cycle_marks(&mut self, targets: CellSet, digit: Digit) -> Applied {
        let mut applicable = CellSet::new();
        let (mut neither, mut candidate, mut anti) = (0usize, 0usize, 0usize);
        for index in targets {
            let cell = self.cell(index);
            if cell.is_given || cell.value.is_some() {
                continue;
            }
            applicable.insert(index);
            if cell.candidates.contains(digit) {
                candidate += 1;
            } else if cell.anti_candidates.contains(digit) {
                anti += 1;
            } else {
                neither += 1;
            }
        }
        if applicable.is_empty() {
            return Applied::No;
        }

        let mut changed = false;
        if neither > 0 {
            for index in applicable {
                let has_neither = {
                    let cell = self.cell(index);
                    !cell.candidates.contains(digit) && !cell.anti_candidates.contains(digit)
                };
                if has_neither && !self.peer_value_clash(index, digit) {
                    let cell = self.cell_mut(index);
                    cell.candidates.insert(digit);
                    changed = true;
                }
            }
        } else if candidate > 0 {
            for index in applicable {
                let cell = self.cell_mut(index);
                if cell.candidates.remove(digit) {
                    cell.anti_candidates.insert(digit);
                    changed = true;
                }
            }
        } else if anti > 0 {
            for index in applicable {
                let cell = self.cell_mut(index);
                if cell.anti_candidates.remove(digit) {
                    changed = true;
                }
            }
        }
        Applied::from_changed(changed)
    }

    /// Commits every current naked single simultaneously, with peer
    /// elimination, and reports the pass.
    ///
    /// Eliminations from cells solved in this pass can create new naked
    /// singles; callers loop until `None`, snapshotting once per pass.
    /// Returns `None` when the board holds no naked singles, which makes
    /// the chained solve idempotent.
    pub fn solve_singles_pass(&mut self) -> Option<SolvePass> {
        let singles: Vec<(CellIndex, Digit)> = CellIndex::all()
            .filter_map(|index| {
                let cell = self.cell(index);
                if cell.value.is_none() {
                    cell.candidates.as_single().map(|digit| (index, digit))
                } else {
                    None
                }
            })
            .collect();
        if singles.is_empty() {
            return None;
        }

        let mut solved = Vec::with_capacity(singles.len());
        for (index, digit) in singles {
            // A peer solved earlier in this pass may have eliminated the
            // candidate already; re-check before committing.
            let cell = self.cell(index);
            if cell.value.is_some() || !cell.candidates.contains(digit) {
                continue;
            }
            let cell = self.cell_mut(index);
            cell.value = Some(digit);
            cell.candidates.clear();
            cell.anti_candidates.clear();
            self.eliminate_from_peers(index, digit);
            solved.push(index);
        }
        if solved.is_empty() {
            return None;
        }
        log::debug!("naked-singles pass committed {} cells", solved.len());
        Some(SolvePass { solved })
    }

    /// Returns whether every cell holds a value.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| cell.value.is_some())
    }

    /// Returns whether the board matches `solution` digit for digit.
    ///
    /// A filled-but-wrong cell means not solved; so does any empty cell.
    #[must_use]
    pub fn matches_solution(&self, solution: &Solution) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, cell)| cell.value == Some(solution.digit(i)))
    }

    /// Returns whether the board counts as solved.
    ///
    /// With a solution grid present, every cell must match it exactly; with
    /// none, completion falls back to value-totality without a correctness
    /// check.
    #[must_use]
    pub fn is_solved(&self, solution: Option<&Solution>) -> bool {
        match solution {
            Some(solution) => self.matches_solution(solution),
            None => self.is_filled(),
        }
    }

    /// Sets the derived hidden-single annotation on a cell.
    ///
    /// Annotations are derived state; they are recomputed by the assistance
    /// layer and never survive into history comparisons on their own.
    pub fn set_hidden_single(&mut self, index: CellIndex, digit: Digit) {
        self.cell_mut(index).hidden_single = Some(digit);
    }

    /// Clears every cell's derived hidden-single annotation.
    pub fn clear_hidden_singles(&mut self) {
        for cell in &mut self.cells {
            cell.hidden_single = None;
        }
    }

    /// Checks the whole-board invariants; used by tests and debug
    /// assertions in the session layer.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        self.cells.iter().all(Cell::invariants_hold)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_puzzle(&Puzzle::default())
    }
}
