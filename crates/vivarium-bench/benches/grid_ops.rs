//! Criterion micro-benchmarks for grid neighbor queries and snapshots.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vivarium_bench::reference_board;
use vivarium_core::Coord;
use vivarium_grid::Grid;

/// Benchmark: neighbor coordinate sweep over every cell of a 100x100 grid.
fn bench_neighbour_sweep(c: &mut Criterion) {
    let grid = Grid::new(100, 100).unwrap();
    c.bench_function("neighbour_sweep_100x100", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for coord in grid.coords() {
                total += grid.neighbours(black_box(coord)).len();
            }
            black_box(total)
        });
    });
}

/// Benchmark: live-neighbor counting over every cell of a seeded board.
fn bench_live_neighbour_count(c: &mut Criterion) {
    let engine = reference_board(42);
    let grid = engine.grid().unwrap();
    c.bench_function("live_neighbour_count_100x100", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for coord in grid.coords() {
                total += u64::from(grid.count_live_neighbours(black_box(coord)).unwrap());
            }
            black_box(total)
        });
    });
}

/// Benchmark: snapshot capture of a seeded 100x100 board.
fn bench_snapshot_capture(c: &mut Criterion) {
    let engine = reference_board(42);
    let grid = engine.grid().unwrap();
    c.bench_function("snapshot_100x100", |b| {
        b.iter(|| black_box(grid.snapshot().population()));
    });
}

/// Benchmark: single-cell access on the hot corner and center paths.
fn bench_cell_access(c: &mut Criterion) {
    let engine = reference_board(42);
    let grid = engine.grid().unwrap();
    c.bench_function("is_alive_center", |b| {
        b.iter(|| black_box(grid.is_alive(black_box(Coord::new(50, 50))).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_neighbour_sweep,
    bench_live_neighbour_count,
    bench_snapshot_capture,
    bench_cell_access,
);
criterion_main!(benches);
