use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minefield_core::{Board, Coord, GameLevel, MinePlacement};

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");
    for (name, level) in [
        ("beginner", GameLevel::beginner()),
        ("advanced", GameLevel::advanced()),
    ] {
        for placement in [MinePlacement::IndependentDraws, MinePlacement::DistinctCells] {
            group.bench_function(format!("{name}/{placement:?}"), |b| {
                let mut seed = 0;
                b.iter(|| {
                    let mut board = Board::new(level);
                    board.initialize_game_seeded(placement, seed);
                    seed += 1;
                    black_box(board)
                })
            });
        }
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let blank = Board::from_mine_coords(Coord::MAX, Coord::MAX, &[]).unwrap();
    c.bench_function("cascade/blank_255x255", |b| {
        b.iter(|| {
            let mut board = blank.clone();
            board.open_surrounded_cells(black_box((0, 0)));
            board
        })
    });

    let mut advanced = Board::new(GameLevel::advanced());
    advanced.initialize_game_seeded(MinePlacement::DistinctCells, 7);
    c.bench_function("cascade/advanced_sweep", |b| {
        b.iter(|| {
            let mut board = advanced.clone();
            for row in 0..board.row_size() {
                for col in 0..board.col_size() {
                    board.open_surrounded_cells((row, col));
                }
            }
            board
        })
    });
}

criterion_group!(benches, bench_initialize, bench_cascade);
criterion_main!(benches);
