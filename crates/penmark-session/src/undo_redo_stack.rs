//! A bounded linear undo/redo stack.

use std::{collections::VecDeque, num::NonZero};

/// A linear history of `T` with a cursor.
///
/// Pushing after an undo truncates the redo tail; the history never
/// branches. When the stack is full the oldest entry is evicted and the
/// cursor shifts with it, so deep undo chains degrade gracefully instead
/// of failing.
#[derive(Debug, Clone)]
pub(crate) struct UndoRedoStack<T> {
    entries: VecDeque<T>,
    capacity: NonZero<usize>,
    cursor: usize,
}

impl<T> UndoRedoStack<T> {
    #[must_use]
    pub(crate) fn new(capacity: NonZero<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            cursor: 0,
        }
    }

    /// The entry the cursor points at, if any.
    #[must_use]
    pub(crate) fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pushes a new entry after the cursor, dropping any redo tail and,
    /// at capacity, the oldest entry.
    pub(crate) fn push(&mut self, entry: T) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
            if self.entries.len() == self.capacity.get() {
                self.entries.pop_front();
                self.cursor = self.cursor.saturating_sub(1);
            }
        }
        self.entries.push_back(entry);
        self.cursor = self.entries.len() - 1;
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Steps the cursor back by one; `false` at the oldest entry.
    pub(crate) fn undo(&mut self) -> bool {
        let can = self.can_undo();
        if can {
            self.cursor -= 1;
        }
        can
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Steps the cursor forward by one; `false` at the newest entry.
    pub(crate) fn redo(&mut self) -> bool {
        let can = self.can_redo();
        if can {
            self.cursor += 1;
        }
        can
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
