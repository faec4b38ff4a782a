//! The 27 houses of the grid.

use crate::{CellIndex, CellSet};

/// A Sudoku house (row, column, or 3×3 box).
///
/// Houses are the unit of completion checks and hidden-single detection:
/// each must contain every digit exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its column coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All houses in row, column, box order (27 entries).
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell slot within the house (0-8) into an absolute
    /// [`CellIndex`].
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not in the range 0-8.
    #[must_use]
    pub const fn cell(self, slot: u8) -> CellIndex {
        assert!(slot < 9);
        match self {
            House::Row { y } => CellIndex::from_row_col(y, slot),
            House::Column { x } => CellIndex::from_row_col(slot, x),
            House::Box { index } => {
                CellIndex::from_row_col((index / 3) * 3 + slot / 3, (index % 3) * 3 + slot % 3)
            }
        }
    }

    /// Returns the nine cells of this house in slot order.
    #[must_use]
    pub const fn cells(self) -> [CellIndex; 9] {
        let mut cells = [CellIndex::new(0); 9];
        let mut slot = 0;
        while slot < 9 {
            cells[slot as usize] = self.cell(slot);
            slot += 1;
        }
        cells
    }

    /// Returns the cells of this house as a [`CellSet`].
    #[must_use]
    pub fn cell_set(self) -> CellSet {
        self.cells().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_27_disjoint_kinds() {
        assert_eq!(House::ALL.len(), 27);
        let rows = House::ALL
            .iter()
            .filter(|h| matches!(h, House::Row { .. }))
            .count();
        let cols = House::ALL
            .iter()
            .filter(|h| matches!(h, House::Column { .. }))
            .count();
        let boxes = House::ALL
            .iter()
            .filter(|h| matches!(h, House::Box { .. }))
            .count();
        assert_eq!((rows, cols, boxes), (9, 9, 9));
    }

    #[test]
    fn every_house_has_nine_distinct_cells() {
        for house in House::ALL {
            assert_eq!(house.cell_set().len(), 9);
        }
    }

    #[test]
    fn each_cell_appears_in_three_houses() {
        for cell in CellIndex::all() {
            let containing = House::ALL
                .iter()
                .filter(|house| house.cell_set().contains(cell))
                .count();
            assert_eq!(containing, 3);
        }
    }

    #[test]
    fn box_cells_cover_the_block() {
        let cells = House::Box { index: 4 }.cells();
        for cell in cells {
            assert!((3..6).contains(&cell.row()));
            assert!((3..6).contains(&cell.col()));
        }
    }
}
