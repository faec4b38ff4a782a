//! Assistance analysis for Penmark boards.
//!
//! This crate derives highlight annotations from the current board state:
//! hidden-single detection over houses, and bi-value cell marking. Both are
//! pure read-and-annotate passes over a [`penmark_board::Board`]; they never
//! change values or marks, so assistance can be toggled freely without
//! touching history.

mod bi_value;
mod hidden_single;
mod mode;

pub use self::{
    bi_value::bi_value_cells,
    hidden_single::update_hidden_singles,
    mode::AssistMode,
};
