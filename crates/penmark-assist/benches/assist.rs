//! Micro-benchmarks for the assistance passes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench assist
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use penmark_assist::{bi_value_cells, update_hidden_singles};
use penmark_board::{Board, MarkKind};
use penmark_core::{CellIndex, CellSet, Digit};

fn empty_board() -> Board {
    Board::from_puzzle(&".".repeat(81).parse().unwrap())
}

/// A board where every unvalued cell carries a couple of candidates, which
/// is the expensive case for the house tallies.
fn marked_board() -> Board {
    let mut board = empty_board();
    for index in CellIndex::all() {
        let first = Digit::from_value(index.index() % 9 + 1);
        let second = Digit::from_value((index.index() + 3) % 9 + 1);
        let target = CellSet::from_cell(index);
        board.toggle_mark(target, first, MarkKind::Candidate);
        board.toggle_mark(target, second, MarkKind::Candidate);
    }
    board
}

fn bench_update_hidden_singles(c: &mut Criterion) {
    let boards = [("empty", empty_board()), ("marked", marked_board())];
    for (param, board) in boards {
        c.bench_with_input(
            BenchmarkId::new("update_hidden_singles", param),
            &board,
            |b, board| {
                b.iter_batched_ref(
                    || hint::black_box(board.clone()),
                    |board| update_hidden_singles(board),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_bi_value_cells(c: &mut Criterion) {
    let board = marked_board();
    c.bench_function("bi_value_cells", |b| {
        b.iter(|| hint::black_box(bi_value_cells(hint::black_box(&board))));
    });
}

criterion_group!(benches, bench_update_hidden_singles, bench_bi_value_cells);
criterion_main!(benches);
