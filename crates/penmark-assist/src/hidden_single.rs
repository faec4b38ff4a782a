//! Hidden-single detection over rows, columns, and boxes.

use penmark_board::Board;
use penmark_core::{Digit, House};
use tinyvec::ArrayVec;

/// Recomputes every cell's hidden-single annotation from the current marks.
///
/// A cell is a hidden single for a digit when it is the only unvalued cell
/// in some house carrying that digit as a candidate, and its own candidate
/// set holds more than one digit. Single-candidate cells are naked singles
/// and are shown through the bolder placement path instead, so they are
/// excluded here.
///
/// All previous annotations are cleared first; the pass is a pure function
/// of the candidate marks. Anti-candidates never participate.
pub fn update_hidden_singles(board: &mut Board) {
    board.clear_hidden_singles();

    // (cell index, digit value) findings, collected before writing so the
    // scan sees a consistent board. At most one push per house-digit pair,
    // so 27 * 9 bounds the length.
    let mut findings: ArrayVec<[(u8, u8); 243]> = ArrayVec::new();
    for house in House::ALL {
        for digit in Digit::ALL {
            let mut sole = None;
            let mut count = 0_u32;
            for index in house.cells() {
                let cell = board.cell(index);
                if cell.value.is_none() && cell.candidates.contains(digit) {
                    sole = Some(index);
                    count += 1;
                }
            }
            if count != 1 {
                continue;
            }
            if let Some(index) = sole
                && board.cell(index).candidates.len() > 1
                && !findings.contains(&(index.index(), digit.value()))
            {
                findings.push((index.index(), digit.value()));
            }
        }
    }
    for (index, value) in findings {
        let index = penmark_core::CellIndex::new(index);
        // A cell can qualify for several digits; the first finding wins.
        if board.cell(index).hidden_single.is_none() {
            board.set_hidden_single(index, Digit::from_value(value));
        }
    }
}
