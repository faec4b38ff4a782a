//! Row-major cell indices for the 9×9 grid.

use std::fmt::{self, Display};

/// A validated cell index in the range 0-80, row-major (`index = row*9 + col`).
///
/// # Examples
///
/// ```
/// use penmark_core::CellIndex;
///
/// let cell = CellIndex::from_row_col(4, 7);
/// assert_eq!(cell.index(), 43);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 7);
/// assert_eq!(cell.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(u8);

impl CellIndex {
    /// Creates a cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81, "cell index out of range");
        Self(index)
    }

    /// Creates a cell index, returning `None` outside 0-80.
    #[must_use]
    pub const fn try_new(index: u8) -> Option<Self> {
        if index < 81 { Some(Self(index)) } else { None }
    }

    /// Creates a cell index from row and column coordinates (each 0-8).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "row/col out of range");
        Self(row * 9 + col)
    }

    /// Returns the raw index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the raw index as a `usize`, for array access.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the 3×3 box index (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns an iterator over all 81 cell indices in row-major order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..81).map(Self)
    }
}

impl Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row() + 1, self.col() + 1)
    }
}

/// Error returned when converting an out-of-range integer to a [`CellIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell index out of range: {_0}")]
pub struct CellIndexOutOfRange(#[error(not(source))] pub u8);

impl TryFrom<u8> for CellIndex {
    type Error = CellIndexOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::try_new(index).ok_or(CellIndexOutOfRange(index))
    }
}
