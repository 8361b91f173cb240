//! Incremental random population of a fresh grid.
//!
//! Seeding visits every cell exactly once in row-major order (`y` varies
//! fastest) and rolls each one alive with the configured probability.
//! The walk is cut into single-cell steps so a driver can interleave it
//! with rendering or cancellation checks, and the RNG is seeded from the
//! configuration so a given seed always produces the same board.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vivarium_core::{CellSink, Coord};
use vivarium_grid::Grid;

use crate::config::SimConfig;

/// Row-major seeding cursor over a `width x height` grid.
#[derive(Clone, Debug)]
pub struct Seeder {
    cursor: Option<Coord>,
    width: u32,
    height: u32,
    probability: f64,
    rng: ChaCha8Rng,
}

impl Seeder {
    /// Build a seeder positioned at the first cell of the grid described
    /// by `config`.
    ///
    /// Expects a validated config: `seed_probability` must lie in
    /// `[0, 1]`, as [`SimConfig::validate`] enforces. An out-of-range
    /// probability would otherwise panic inside the RNG on the first
    /// [`step`](Seeder::step).
    pub fn new(config: &SimConfig) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&config.seed_probability),
            "seed probability {} outside [0, 1]; validate the config first",
            config.seed_probability
        );
        Self {
            cursor: Some(Coord::new(0, 0)),
            width: config.width,
            height: config.height,
            probability: config.seed_probability,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        }
    }

    /// Visit the next cell: roll it, write the outcome to `grid`, and
    /// notify `sink`.
    ///
    /// Returns the coordinate visited, or `None` once every cell has
    /// been rolled. Calling again after exhaustion stays `None`.
    pub fn step(&mut self, grid: &mut Grid, sink: &dyn CellSink) -> Option<Coord> {
        let coord = self.cursor?;

        let alive = self.rng.gen_bool(self.probability);
        if alive {
            grid.set_alive(coord, true)
                .expect("seeding cursor stays within the grid it was built for");
        }
        sink.on_cell_state(coord, alive);

        self.cursor = self.advance(coord);
        Some(coord)
    }

    fn advance(&self, coord: Coord) -> Option<Coord> {
        if coord.y + 1 < self.height {
            Some(Coord::new(coord.x, coord.y + 1))
        } else if coord.x + 1 < self.width {
            Some(Coord::new(coord.x + 1, 0))
        } else {
            None
        }
    }

    /// Whether every cell has been visited.
    pub fn is_complete(&self) -> bool {
        self.cursor.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivarium_core::NullSink;

    fn config(width: u32, height: u32, probability: f64, seed: u64) -> SimConfig {
        SimConfig {
            width,
            height,
            seed_probability: probability,
            seed,
            ..SimConfig::default()
        }
    }

    #[test]
    fn visits_every_cell_once_in_row_major_order() {
        let cfg = config(3, 2, 0.5, 7);
        let mut grid = Grid::new(3, 2).unwrap();
        let mut seeder = Seeder::new(&cfg);

        let mut visited = Vec::new();
        while let Some(coord) = seeder.step(&mut grid, &NullSink) {
            visited.push((coord.x, coord.y));
        }

        assert_eq!(
            visited,
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
        assert!(seeder.is_complete());
    }

    #[test]
    fn step_after_exhaustion_returns_none() {
        let cfg = config(2, 2, 0.5, 1);
        let mut grid = Grid::new(2, 2).unwrap();
        let mut seeder = Seeder::new(&cfg);

        while seeder.step(&mut grid, &NullSink).is_some() {}
        assert_eq!(seeder.step(&mut grid, &NullSink), None);
        assert!(seeder.is_complete());
    }

    #[test]
    fn probability_zero_leaves_the_grid_empty() {
        let cfg = config(8, 8, 0.0, 42);
        let mut grid = Grid::new(8, 8).unwrap();
        let mut seeder = Seeder::new(&cfg);

        while seeder.step(&mut grid, &NullSink).is_some() {}
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn probability_one_fills_the_grid() {
        let cfg = config(4, 5, 1.0, 42);
        let mut grid = Grid::new(4, 5).unwrap();
        let mut seeder = Seeder::new(&cfg);

        while seeder.step(&mut grid, &NullSink).is_some() {}
        assert_eq!(grid.population(), 20);
    }

    #[test]
    fn identical_seeds_produce_identical_boards() {
        let cfg = config(10, 10, 1.0 / 6.0, 99);

        let mut first = Grid::new(10, 10).unwrap();
        let mut seeder = Seeder::new(&cfg);
        while seeder.step(&mut first, &NullSink).is_some() {}

        let mut second = Grid::new(10, 10).unwrap();
        let mut seeder = Seeder::new(&cfg);
        while seeder.step(&mut second, &NullSink).is_some() {}

        assert_eq!(first.snapshot().alive(), second.snapshot().alive());
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn out_of_range_probability_is_caught_at_construction() {
        let _ = Seeder::new(&config(2, 2, 1.5, 0));
    }

    #[test]
    fn different_seeds_usually_differ() {
        let mut first = Grid::new(12, 12).unwrap();
        let mut seeder = Seeder::new(&config(12, 12, 0.5, 1));
        while seeder.step(&mut first, &NullSink).is_some() {}

        let mut second = Grid::new(12, 12).unwrap();
        let mut seeder = Seeder::new(&config(12, 12, 0.5, 2));
        while seeder.step(&mut second, &NullSink).is_some() {}

        assert_ne!(first.snapshot().alive(), second.snapshot().alive());
    }
}
