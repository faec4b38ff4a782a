//! Cell-state model and mutation core for the Penmark board editor.
//!
//! This crate owns the 81-cell board, the per-cell record (committed value,
//! given flag, candidate and anti-candidate marks, derived hidden-single
//! annotation), and the state-transition operations the interaction layer
//! drives: setting values with peer elimination, erasing, toggling and
//! cycling marks across a selection, and the chained naked-singles solve.
//!
//! Every operation reports whether it actually changed anything, so the
//! session layer can commit exactly one history snapshot per logical user
//! action and skip snapshots for no-ops.
//!
//! # Examples
//!
//! ```
//! use penmark_board::{Board, Puzzle};
//! use penmark_core::{CellIndex, Digit};
//!
//! let puzzle = Puzzle::default();
//! let mut board = Board::from_puzzle(&puzzle);
//!
//! // The default board's top-left cell is a given.
//! assert!(board.cell(CellIndex::new(0)).is_given);
//! assert!(board.set_value(CellIndex::new(0), Digit::D1).is_err());
//! ```

pub mod board;
pub mod cell;
pub mod puzzle;

pub use self::{
    board::{Applied, Board, BoardSnapshot, MutationError, SolvePass},
    cell::{Cell, MarkKind},
    puzzle::{ParsePuzzleError, Puzzle, PuzzleId, Solution},
};
