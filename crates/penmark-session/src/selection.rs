//! The transient multi-cell selection.

use penmark_core::{CellIndex, CellSet};

/// The set of selected cells plus the actioned latch.
///
/// The latch records that the current selection has already received a
/// completed mark action. A latched selection no longer counts as
/// "in progress", so a plain tap replaces it instead of adding to it.
/// Any membership change releases the latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    cells: CellSet,
    is_actioned: bool,
}

impl Selection {
    /// The selected cells.
    #[must_use]
    pub fn cells(&self) -> CellSet {
        self.cells
    }

    /// Whether `cell` is selected.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains(cell)
    }

    /// Whether no cells are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the current selection has received a completed action.
    #[must_use]
    pub fn is_actioned(&self) -> bool {
        self.is_actioned
    }

    /// Marks the selection as having received a completed action.
    pub fn mark_actioned(&mut self) {
        self.is_actioned = true;
    }

    /// Adds a cell, releasing the latch.
    pub fn insert(&mut self, cell: CellIndex) {
        self.cells.insert(cell);
        self.is_actioned = false;
    }

    /// Removes a cell, releasing the latch.
    pub fn remove(&mut self, cell: CellIndex) {
        self.cells.remove(cell);
        self.is_actioned = false;
    }

    /// Toggles membership, returning whether the cell is now selected.
    pub fn toggle(&mut self, cell: CellIndex) -> bool {
        let selected = if self.cells.remove(cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        };
        self.is_actioned = false;
        selected
    }

    /// Deselects everything, releasing the latch.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.is_actioned = false;
    }
}
