//! An 81-bit set of cell indices.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub},
};

use crate::CellIndex;

/// A set of [`CellIndex`]es backed by a `u128` bit mask.
///
/// Used for houses, peer sets, selections, and analysis results. Iteration
/// is in ascending index order.
///
/// # Examples
///
/// ```
/// use penmark_core::{CellIndex, CellSet};
///
/// let mut selection = CellSet::new();
/// selection.insert(CellIndex::new(0));
/// selection.insert(CellIndex::new(40));
/// assert_eq!(selection.len(), 2);
/// assert!(selection.contains(CellIndex::new(40)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(u128);

const MASK: u128 = (1 << 81) - 1;

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all 81 cells.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single cell.
    #[must_use]
    pub const fn from_cell(cell: CellIndex) -> Self {
        Self(1 << cell.index())
    }

    pub(crate) const fn from_bits(bits: u128) -> Self {
        Self(bits & MASK)
    }

    /// Inserts a cell, returning `true` if it was not already present.
    pub const fn insert(&mut self, cell: CellIndex) -> bool {
        let bit = Self::from_cell(cell).0;
        let changed = self.0 & bit == 0;
        self.0 |= bit;
        changed
    }

    /// Removes a cell, returning `true` if it was present.
    pub const fn remove(&mut self, cell: CellIndex) -> bool {
        let bit = Self::from_cell(cell).0;
        let changed = self.0 & bit != 0;
        self.0 &= !bit;
        changed
    }

    /// Returns whether the set contains `cell`.
    #[must_use]
    pub const fn contains(self, cell: CellIndex) -> bool {
        self.0 & Self::from_cell(cell).0 != 0
    }

    /// Removes all cells.
    pub const fn clear(&mut self) {
        self.0 = 0;
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the cells in ascending index order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for CellSet {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0 & MASK)
    }
}

impl Sub for CellSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}

impl FromIterator<CellIndex> for CellSet {
    fn from_iter<T: IntoIterator<Item = CellIndex>>(iter: T) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = CellIndex;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Ascending iterator over the cells of a [`CellSet`].
#[derive(Debug, Clone)]
pub struct Iter(u128);

impl Iterator for Iter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<CellIndex> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        CellIndex::try_new(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn insert_remove_and_membership() {
        let mut set = CellSet::new();
        let cell = CellIndex::new(80);
        assert!(set.insert(cell));
        assert!(!set.insert(cell));
        assert!(set.contains(cell));
        assert!(set.remove(cell));
        assert!(set.is_empty());
    }

    #[test]
    fn set_algebra() {
        let a: CellSet = [0, 1, 2].into_iter().map(CellIndex::new).collect();
        let b: CellSet = [1, 2, 3].into_iter().map(CellIndex::new).collect();
        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).len(), 2);
        assert_eq!((a - b).len(), 1);
        assert_eq!((!CellSet::EMPTY).len(), 81);
    }

    #[test]
    fn iteration_is_ascending() {
        let set: CellSet = [40u8, 3, 80, 0]
            .into_iter()
            .map(CellIndex::new)
            .collect();
        let indices: Vec<_> = set.iter().map(CellIndex::index).collect();
        assert_eq!(indices, vec![0, 3, 40, 80]);
    }

    proptest! {
        #[test]
        fn len_matches_distinct_members(values in proptest::collection::vec(0u8..81, 0..40)) {
            let set: CellSet = values.iter().map(|&v| CellIndex::new(v)).collect();
            let mut distinct = values;
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(set.len(), distinct.len());
        }
    }
}
