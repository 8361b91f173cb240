//! Integration test: active-set evaluation agrees with brute force.
//!
//! The engine only evaluates cells in the active set; the reference
//! stepper evaluates every cell of the board. For any starting board
//! the two must produce identical boards generation after generation,
//! which is the correctness argument for the optimization.

use proptest::prelude::*;
use vivarium_core::NullSink;
use vivarium_engine::{LifeEngine, SimConfig};
use vivarium_grid::{Grid, GridSnapshot};
use vivarium_test_utils::{grid_from_rows, naive_step, rows_from_grid};

/// Put a Running engine on the given board.
fn engine_on(grid: &Grid) -> LifeEngine {
    let mut engine = LifeEngine::new();
    let config = SimConfig {
        width: grid.width(),
        height: grid.height(),
        seed_probability: 0.0,
        ..SimConfig::default()
    };
    engine.setup(config).unwrap();
    engine.seed_all(&NullSink).unwrap();
    engine.restore(&grid.snapshot()).unwrap();
    engine
}

fn grid_from_snapshot(snapshot: &GridSnapshot) -> Grid {
    let mut grid = Grid::new(snapshot.width(), snapshot.height()).unwrap();
    grid.restore(snapshot).unwrap();
    grid
}

#[test]
fn glider_travels_like_the_reference() {
    let mut engine = engine_on(&grid_from_rows(&[
        ".#........",
        "..#.......",
        "###.......",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
    ]));
    let mut reference = grid_from_snapshot(&engine.snapshot().unwrap());

    for _ in 0..20 {
        engine.step_generation(&NullSink).unwrap();
        reference = naive_step(&reference);
        assert_eq!(
            rows_from_grid(&grid_from_snapshot(&engine.snapshot().unwrap())),
            rows_from_grid(&reference)
        );
    }
}

#[test]
fn r_pentomino_agrees_for_many_generations() {
    // Chaotic growth exercises births well outside the initial pattern.
    let mut engine = engine_on(&grid_from_rows(&[
        "................",
        "................",
        "......##........",
        ".....##.........",
        "......#.........",
        "................",
        "................",
        "................",
        "................",
        "................",
        "................",
        "................",
    ]));
    let mut reference = grid_from_snapshot(&engine.snapshot().unwrap());

    for generation in 0..40 {
        engine.step_generation(&NullSink).unwrap();
        reference = naive_step(&reference);
        assert_eq!(
            rows_from_grid(&grid_from_snapshot(&engine.snapshot().unwrap())),
            rows_from_grid(&reference),
            "diverged at generation {}",
            generation + 1
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_boards_agree_with_brute_force(
        width in 1u32..14,
        height in 1u32..14,
        seed_bits in any::<u128>(),
    ) {
        let mut start = Grid::new(width, height).unwrap();
        let coords: Vec<_> = start.coords().collect();
        for (index, coord) in coords.into_iter().enumerate() {
            if (seed_bits >> (index % 128)) & 1 == 1 {
                start.set_alive(coord, true).unwrap();
            }
        }

        let mut engine = engine_on(&start);
        let mut reference = start;

        for _ in 0..6 {
            engine.step_generation(&NullSink).unwrap();
            reference = naive_step(&reference);
            prop_assert_eq!(
                grid_from_snapshot(&engine.snapshot().unwrap()).snapshot(),
                reference.snapshot()
            );
        }
    }
}
