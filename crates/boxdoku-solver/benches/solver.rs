//! End-to-end solver benchmarks.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use boxdoku_core::{Board, BoxDims};
use boxdoku_solver::Solver;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn classic_9x9() -> Board {
    Board::parse(
        "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_

        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6

        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
        ",
        BoxDims::new(3, 3),
    )
    .unwrap()
}

fn sparse_9x9() -> Board {
    // Deep search: only one band of clues.
    Board::parse(
        "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_

        ___ ___ ___
        ___ ___ ___
        ___ ___ ___

        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ",
        BoxDims::new(3, 3),
    )
    .unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for (name, board) in [("classic_9x9", classic_9x9()), ("sparse_9x9", sparse_9x9())] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || Solver::new(board.clone()).unwrap(),
                |mut solver| hint::black_box(solver.solve().is_ok()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let board = classic_9x9();
    c.bench_function("construct", |b| {
        b.iter_batched(
            || board.clone(),
            |board| hint::black_box(Solver::new(board).is_ok()),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve, bench_construction);
criterion_main!(benches);
