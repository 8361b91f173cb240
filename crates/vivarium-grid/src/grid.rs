//! The bounded 2D cell grid.

use smallvec::SmallVec;
use vivarium_core::{Cell, Coord, Transition};

use crate::error::GridError;
use crate::snapshot::GridSnapshot;

/// All 8 neighbor offsets `(dx, dy)`: W, E, N, S, NW, SW, NE, SE.
///
/// The order is arbitrary but fixed — neighbor enumeration must be
/// deterministic within a run so tests are reproducible.
const OFFSETS_8: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A bounded two-dimensional grid of [`Cell`]s.
///
/// Dimensions are fixed at construction. Cells are stored row-major
/// with `y` as the fast axis, matching the initialization cursor's
/// scan order. The grid exclusively owns its cells; all mutation goes
/// through bounds-checked methods.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of dead cells.
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is
    /// zero or the cell count overflows `usize`, before any allocation.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or(invalid)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::DEAD; count],
        })
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Check bounds and return the storage index for `coord`.
    fn index_of(&self, coord: Coord) -> Result<usize, GridError> {
        if coord.x >= self.width || coord.y >= self.height {
            return Err(GridError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        Ok((coord.x as usize) * (self.height as usize) + coord.y as usize)
    }

    /// Bounds-checked shared access to a cell.
    pub fn get(&self, coord: Coord) -> Result<&Cell, GridError> {
        let idx = self.index_of(coord)?;
        Ok(&self.cells[idx])
    }

    /// Bounds-checked mutable access to a cell.
    pub fn get_mut(&mut self, coord: Coord) -> Result<&mut Cell, GridError> {
        let idx = self.index_of(coord)?;
        Ok(&mut self.cells[idx])
    }

    /// Committed state of the cell at `coord`.
    pub fn is_alive(&self, coord: Coord) -> Result<bool, GridError> {
        Ok(self.get(coord)?.alive)
    }

    /// Set the committed state of the cell at `coord` directly.
    ///
    /// Used during seeding and restore; generation transitions go
    /// through [`stage()`](Grid::stage) and [`take_pending()`](Grid::take_pending)
    /// instead so neighbor reads stay consistent mid-generation.
    pub fn set_alive(&mut self, coord: Coord, alive: bool) -> Result<(), GridError> {
        self.get_mut(coord)?.alive = alive;
        Ok(())
    }

    /// Stage a transition on the cell at `coord` without applying it.
    pub fn stage(&mut self, coord: Coord, transition: Transition) -> Result<(), GridError> {
        self.get_mut(coord)?.pending = Some(transition);
        Ok(())
    }

    /// Remove and return the staged transition at `coord`, if any.
    pub fn take_pending(&mut self, coord: Coord) -> Result<Option<Transition>, GridError> {
        Ok(self.get_mut(coord)?.pending.take())
    }

    /// The up-to-8 in-bounds neighbors of `coord`, in the fixed scan
    /// order of the offset table. Edge and corner cells yield fewer.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        let mut result = SmallVec::new();
        for (dx, dy) in OFFSETS_8 {
            let nx = coord.x as i64 + dx;
            let ny = coord.y as i64 + dy;
            if nx >= 0 && nx < self.width as i64 && ny >= 0 && ny < self.height as i64 {
                result.push(Coord::new(nx as u32, ny as u32));
            }
        }
        result
    }

    /// Count of live neighbors of `coord`, in `0..=8`.
    ///
    /// Counts committed `alive` state only; staged transitions are
    /// invisible to neighbor queries.
    pub fn count_live_neighbours(&self, coord: Coord) -> Result<u8, GridError> {
        // Bounds-check the center even though only neighbors are read.
        self.index_of(coord)?;
        let mut count = 0u8;
        for n in self.neighbours(coord) {
            if self.cells[(n.x as usize) * (self.height as usize) + n.y as usize].alive {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Row-major iterator over every coordinate (`y` fastest, then `x`),
    /// the same order the initialization cursor visits them.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
    }

    /// Full copy of every cell's committed state.
    ///
    /// Staged transitions are transient and are not captured.
    pub fn snapshot(&self) -> GridSnapshot {
        let alive = self.cells.iter().map(|c| c.alive).collect();
        // Length is cells.len() == width * height by construction.
        GridSnapshot::from_parts(self.width, self.height, alive)
    }

    /// Replace every cell's committed state from `snapshot`, atomically.
    ///
    /// Fails with [`GridError::ShapeMismatch`] — leaving the grid
    /// untouched — if the snapshot's dimensions differ. On success all
    /// staged transitions are discarded; restored cells carry no
    /// transition history.
    pub fn restore(&mut self, snapshot: &GridSnapshot) -> Result<(), GridError> {
        if snapshot.width() != self.width || snapshot.height() != self.height {
            return Err(GridError::ShapeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                found_width: snapshot.width(),
                found_height: snapshot.height(),
            });
        }
        for (cell, &alive) in self.cells.iter_mut().zip(snapshot.alive()) {
            cell.alive = alive;
            cell.pending = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: u32, y: u32) -> Coord {
        Coord::new(x, y)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.population(), 0);
        assert!(grid.coords().all(|coord| !grid.get(coord).unwrap().alive));
    }

    // ── Bounds tests ────────────────────────────────────────────

    #[test]
    fn out_of_bounds_is_rejected_not_clamped() {
        let mut grid = Grid::new(3, 3).unwrap();
        for coord in [c(3, 0), c(0, 3), c(3, 3), c(u32::MAX, 0)] {
            assert!(matches!(
                grid.get(coord),
                Err(GridError::OutOfBounds { .. })
            ));
            assert!(grid.set_alive(coord, true).is_err());
            assert!(grid.count_live_neighbours(coord).is_err());
        }
        assert_eq!(grid.population(), 0);
    }

    // ── Neighbor tests ──────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(grid.neighbours(c(2, 2)).len(), 8);
    }

    #[test]
    fn neighbours_corner() {
        let grid = Grid::new(5, 5).unwrap();
        let n = grid.neighbours(c(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(grid.neighbours(c(0, 2)).len(), 5);
    }

    #[test]
    fn neighbours_order_is_deterministic() {
        let grid = Grid::new(7, 7).unwrap();
        let first: Vec<_> = grid.neighbours(c(3, 4)).into_iter().collect();
        for _ in 0..10 {
            let again: Vec<_> = grid.neighbours(c(3, 4)).into_iter().collect();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        let grid = Grid::new(1, 1).unwrap();
        assert!(grid.neighbours(c(0, 0)).is_empty());
        assert_eq!(grid.count_live_neighbours(c(0, 0)).unwrap(), 0);
    }

    #[test]
    fn count_live_neighbours_counts_committed_state_only() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_alive(c(0, 0), true).unwrap();
        grid.set_alive(c(1, 0), true).unwrap();
        assert_eq!(grid.count_live_neighbours(c(1, 1)).unwrap(), 2);

        // A staged fill must not show up in neighbor counts.
        grid.stage(c(2, 2), Transition::Fill).unwrap();
        assert_eq!(grid.count_live_neighbours(c(1, 1)).unwrap(), 2);
    }

    // ── Staging tests ───────────────────────────────────────────

    #[test]
    fn take_pending_clears_the_stage() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.stage(c(1, 1), Transition::Fill).unwrap();
        assert_eq!(grid.take_pending(c(1, 1)).unwrap(), Some(Transition::Fill));
        assert_eq!(grid.take_pending(c(1, 1)).unwrap(), None);
    }

    // ── Snapshot / restore tests ────────────────────────────────

    #[test]
    fn snapshot_restore_round_trip() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_alive(c(1, 2), true).unwrap();
        grid.set_alive(c(3, 0), true).unwrap();
        let snap = grid.snapshot();

        let mut other = Grid::new(4, 4).unwrap();
        other.restore(&snap).unwrap();
        assert_eq!(other.snapshot(), snap);
        assert!(other.is_alive(c(1, 2)).unwrap());
        assert!(other.is_alive(c(3, 0)).unwrap());
        assert_eq!(other.population(), 2);
    }

    #[test]
    fn restore_shape_mismatch_leaves_grid_untouched() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_alive(c(2, 2), true).unwrap();
        let before = grid.snapshot();

        let foreign = Grid::new(3, 4).unwrap().snapshot();
        let err = grid.restore(&foreign).unwrap_err();
        assert!(matches!(err, GridError::ShapeMismatch { .. }));
        assert_eq!(grid.snapshot(), before);
    }

    #[test]
    fn restore_discards_staged_transitions() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.stage(c(0, 0), Transition::Fill).unwrap();
        let snap = Grid::new(2, 2).unwrap().snapshot();
        grid.restore(&snap).unwrap();
        assert_eq!(grid.get(c(0, 0)).unwrap().pending, None);
    }

    #[test]
    fn snapshot_excludes_pending() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.stage(c(0, 1), Transition::Fill).unwrap();
        let snap = grid.snapshot();
        assert!(snap.alive().iter().all(|&a| !a));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbour_count_in_range_and_in_bounds(
            width in 1u32..12,
            height in 1u32..12,
            live in prop::collection::vec((0u32..12, 0u32..12), 0..40),
            x in 0u32..12,
            y in 0u32..12,
        ) {
            let mut grid = Grid::new(width, height).unwrap();
            for (lx, ly) in live {
                if lx < width && ly < height {
                    grid.set_alive(c(lx, ly), true).unwrap();
                }
            }
            let coord = c(x % width, y % height);
            let count = grid.count_live_neighbours(coord).unwrap();
            prop_assert!(count <= 8);
            for n in grid.neighbours(coord) {
                prop_assert!(n.x < width && n.y < height);
                prop_assert!(n != coord);
            }
        }

        #[test]
        fn neighbours_symmetric(
            width in 1u32..10,
            height in 1u32..10,
            x in 0u32..10,
            y in 0u32..10,
        ) {
            let grid = Grid::new(width, height).unwrap();
            let coord = c(x % width, y % height);
            for n in grid.neighbours(coord) {
                prop_assert!(
                    grid.neighbours(n).contains(&coord),
                    "neighbour symmetry violated between {} and {}",
                    coord, n,
                );
            }
        }
    }
}
