//! Bi-value cell detection.

use penmark_board::Board;
use penmark_core::{CellIndex, CellSet};

/// Returns the unvalued cells whose candidate set holds exactly two digits.
///
/// These cells are the usual entry points for chain reasoning, so the
/// bi-value assist mode highlights them. Anti-candidates are ignored.
#[must_use]
pub fn bi_value_cells(board: &Board) -> CellSet {
    CellIndex::all()
        .filter(|&index| {
            let cell = board.cell(index);
            cell.value.is_none() && cell.candidates.len() == 2
        })
        .collect()
}
