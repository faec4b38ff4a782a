//! Snapshot history over the board.

use std::num::NonZero;

use penmark_board::{Board, BoardSnapshot};

use crate::undo_redo_stack::UndoRedoStack;

/// Linear undo/redo history of whole-board snapshots.
///
/// Every committed mutation records exactly one snapshot; undo and redo
/// restore the board bit for bit. Selection and highlight state live
/// outside the history.
#[derive(Debug, Clone)]
pub struct History {
    stack: UndoRedoStack<BoardSnapshot>,
}

impl History {
    /// The capacity used by [`Default`].
    #[must_use]
    pub const fn default_capacity() -> NonZero<usize> {
        NonZero::new(5000).unwrap()
    }

    /// Creates an empty history with the given snapshot capacity.
    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            stack: UndoRedoStack::new(capacity),
        }
    }

    /// Drops all history and stores `board` as the single initial snapshot.
    pub fn reset(&mut self, board: &Board) {
        self.stack.clear();
        self.stack.push(board.snapshot());
    }

    /// Records the current board state as a new snapshot.
    pub fn record(&mut self, board: &Board) {
        self.stack.push(board.snapshot());
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.stack.can_redo()
    }

    /// Steps back one snapshot and restores it into `board`.
    /// No-op at the oldest entry.
    pub fn undo(&mut self, board: &mut Board) -> bool {
        if !self.stack.undo() {
            return false;
        }
        if let Some(snapshot) = self.stack.current() {
            board.restore(snapshot);
        }
        true
    }

    /// Steps forward one snapshot and restores it into `board`.
    /// No-op at the newest entry.
    pub fn redo(&mut self, board: &mut Board) -> bool {
        if !self.stack.redo() {
            return false;
        }
        if let Some(snapshot) = self.stack.current() {
            board.restore(snapshot);
        }
        true
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no snapshots are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.len() == 0
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(Self::default_capacity())
    }
}
