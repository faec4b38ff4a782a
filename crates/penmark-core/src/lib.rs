//! Core data structures for the Penmark board editor.
//!
//! This crate provides the fundamental, board-content-independent types the
//! rest of the workspace is built on:
//!
//! - [`Digit`]: type-safe Sudoku digits 1-9
//! - [`DigitSet`]: a 9-bit set of digits, used for candidate and
//!   anti-candidate marks
//! - [`CellIndex`]: a validated row-major cell index 0-80
//! - [`CellSet`]: an 81-bit set of cell indices, used for houses, peer
//!   sets, and selections
//! - [`House`]: the 27 rows/columns/boxes of the grid
//! - [`peers`]: the precomputed peer index (row/column/box peers per cell)
//!
//! Everything here is a pure function of the fixed 9×9/3×3 topology; nothing
//! depends on the contents of a board.
//!
//! # Examples
//!
//! ```
//! use penmark_core::{CellIndex, Digit, DigitSet, peers};
//!
//! let cell = CellIndex::from_row_col(4, 4);
//! assert_eq!(peers(cell).all.len(), 20);
//!
//! let mut marks = DigitSet::new();
//! marks.insert(Digit::D5);
//! assert!(marks.contains(Digit::D5));
//! ```

pub mod cell_index;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod house;
pub mod peer;

pub use self::{
    cell_index::CellIndex,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    house::House,
    peer::{Peers, peers},
};
