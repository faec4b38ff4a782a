//! Precomputed peer index.
//!
//! For every cell, the set of cells sharing its row, column, or box. The
//! tables are a pure function of the fixed grid topology, computed once at
//! compile time and read-only thereafter, never rebuilt per puzzle load.
//!
//! Every peer set, including [`Peers::all`], excludes the cell itself, so
//! `all` always has exactly 20 members. Code that needs the full nine cells
//! of a house goes through [`House::cells`](crate::House::cells) instead.

use crate::{CellIndex, CellSet};

/// The peer sets of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peers {
    /// The 8 other cells in the same row.
    pub row: CellSet,
    /// The 8 other cells in the same column.
    pub column: CellSet,
    /// The 8 other cells in the same 3×3 box.
    pub block: CellSet,
    /// Union of the above: the 20 cells that constrain this one.
    pub all: CellSet,
}

/// Returns the peer sets of `cell`.
#[must_use]
pub fn peers(cell: CellIndex) -> &'static Peers {
    &PEER_TABLE[cell.as_usize()]
}

static PEER_TABLE: [Peers; 81] = build_peer_table();

const fn build_peer_table() -> [Peers; 81] {
    let mut table = [Peers {
        row: CellSet::EMPTY,
        column: CellSet::EMPTY,
        block: CellSet::EMPTY,
        all: CellSet::EMPTY,
    }; 81];

    let mut i = 0;
    while i < 81 {
        let row = i / 9;
        let col = i % 9;
        let box_row = row / 3;
        let box_col = col / 3;
        let own = 1u128 << i;

        let mut row_bits = 0u128;
        let mut col_bits = 0u128;
        let mut block_bits = 0u128;

        let mut c = 0;
        while c < 9 {
            row_bits |= 1 << (row * 9 + c);
            c += 1;
        }
        let mut r = 0;
        while r < 9 {
            col_bits |= 1 << (r * 9 + col);
            r += 1;
        }
        let mut br = box_row * 3;
        while br < box_row * 3 + 3 {
            let mut bc = box_col * 3;
            while bc < box_col * 3 + 3 {
                block_bits |= 1 << (br * 9 + bc);
                bc += 1;
            }
            br += 1;
        }

        table[i] = Peers {
            row: CellSet::from_bits(row_bits & !own),
            column: CellSet::from_bits(col_bits & !own),
            block: CellSet::from_bits(block_bits & !own),
            all: CellSet::from_bits((row_bits | col_bits | block_bits) & !own),
        };
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peer_counts() {
        for cell in CellIndex::all() {
            let peers = peers(cell);
            assert_eq!(peers.row.len(), 8);
            assert_eq!(peers.column.len(), 8);
            assert_eq!(peers.block.len(), 8);
            assert_eq!(peers.all.len(), 20);
        }
    }

    #[test]
    fn peer_sets_exclude_self() {
        for cell in CellIndex::all() {
            let peers = peers(cell);
            assert!(!peers.row.contains(cell));
            assert!(!peers.column.contains(cell));
            assert!(!peers.block.contains(cell));
            assert!(!peers.all.contains(cell));
        }
    }

    #[test]
    fn peer_relation_is_symmetric() {
        for cell in CellIndex::all() {
            for other in peers(cell).all {
                assert!(peers(other).all.contains(cell));
            }
        }
    }

    #[test]
    fn center_cell_spot_check() {
        let center = CellIndex::from_row_col(4, 4);
        let peers = peers(center);
        assert!(peers.row.contains(CellIndex::from_row_col(4, 0)));
        assert!(peers.column.contains(CellIndex::from_row_col(0, 4)));
        assert!(peers.block.contains(CellIndex::from_row_col(3, 3)));
        assert!(!peers.all.contains(CellIndex::from_row_col(0, 0)));
    }
}
