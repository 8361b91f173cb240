//! Test utilities and mock sinks for vivarium development.
//!
//! Provides a [`RecordingSink`] that captures presentation events for
//! assertions, string-based grid fixtures, and [`naive_step`], a
//! deliberately simple full-grid reference stepper that active-set
//! optimized evaluation must agree with.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Mutex;

use vivarium_core::{CellEvent, CellSink, Coord};
use vivarium_grid::Grid;

/// A [`CellSink`] that records every event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<CellEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events seen so far, in arrival order.
    pub fn events(&self) -> Vec<CellEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Number of events seen so far.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl CellSink for RecordingSink {
    fn on_cell_state(&self, coord: Coord, alive: bool) {
        self.events.lock().unwrap().push(CellEvent { coord, alive });
    }
}

/// Build a grid from a row picture, `'#'` alive and `'.'` dead.
///
/// Each string is one row (constant `y`), listed top to bottom, so the
/// picture reads the way the board renders. All rows must be the same
/// length and the picture must be non-empty.
///
/// # Panics
///
/// Panics on ragged or empty input. Test fixture, not production code.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = u32::try_from(rows.len()).unwrap();
    assert!(height > 0, "fixture needs at least one row");
    let width = u32::try_from(rows[0].chars().count()).unwrap();
    assert!(width > 0, "fixture needs at least one column");

    let mut grid = Grid::new(width, height).unwrap();
    for (y, row) in rows.iter().enumerate() {
        let cells: Vec<char> = row.chars().collect();
        assert_eq!(
            cells.len(),
            width as usize,
            "fixture row {y} has the wrong length"
        );
        for (x, ch) in cells.into_iter().enumerate() {
            let alive = match ch {
                '#' => true,
                '.' => false,
                other => panic!("fixture char {other:?} is neither '#' nor '.'"),
            };
            if alive {
                grid.set_alive(Coord::new(x as u32, y as u32), true).unwrap();
            }
        }
    }
    grid
}

/// Render a grid back into the [`grid_from_rows`] picture format.
pub fn rows_from_grid(grid: &Grid) -> Vec<String> {
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| {
                    if grid.is_alive(Coord::new(x, y)).unwrap() {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}

/// Advance `grid` one generation by brute force.
///
/// Evaluates every cell of the board against a copy of the committed
/// state, with no staging and no active set. Slow and obviously
/// correct, which is the point.
pub fn naive_step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height()).unwrap();
    for coord in grid.coords() {
        let alive = grid.is_alive(coord).unwrap();
        let live_neighbours = grid.count_live_neighbours(coord).unwrap();
        let next_alive = match (alive, live_neighbours) {
            (true, 2 | 3) => true,
            (false, 3) => true,
            _ => false,
        };
        if next_alive {
            next.set_alive(coord, true).unwrap();
        }
    }
    next
}
