//! Incremental tracking of the cells worth evaluating.
//!
//! Evaluating every grid cell every generation is wasteful: a dead cell
//! with no live neighbor can never be born. [`ActiveSet`] maintains the
//! subset of coordinates that are alive or adjacent to a live cell —
//! exactly the cells whose state can change next generation. Membership
//! is maintained incrementally from each commit's changed set, and must
//! always equal what a full rescan would produce.

use indexmap::IndexSet;
use vivarium_core::Coord;
use vivarium_grid::Grid;

/// The set of coordinates eligible for transition evaluation.
///
/// Invariant: a coordinate is a member iff it is alive or has at least
/// one alive 8-neighbor, as of the last commit. Backed by an
/// [`IndexSet`] so iteration order is deterministic within a run.
#[derive(Clone, Debug, Default)]
pub struct ActiveSet {
    members: IndexSet<Coord>,
}

impl ActiveSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `coord` satisfies the membership invariant against `grid`.
    pub fn is_eligible(grid: &Grid, coord: Coord) -> bool {
        match grid.is_alive(coord) {
            Ok(true) => true,
            Ok(false) => grid
                .neighbours(coord)
                .iter()
                .any(|&n| matches!(grid.is_alive(n), Ok(true))),
            Err(_) => false,
        }
    }

    /// Recompute membership from scratch with a full grid scan.
    ///
    /// O(width * height). Used once when seeding completes and after
    /// every restore, since restored cells carry no transition history.
    pub fn rebuild_from(&mut self, grid: &Grid) {
        self.members.clear();
        for coord in grid.coords() {
            if Self::is_eligible(grid, coord) {
                self.members.insert(coord);
            }
        }
    }

    /// Incrementally maintain membership after a commit.
    ///
    /// `changed` must be exactly the coordinates whose `alive` flag
    /// flipped this generation. Only those cells and their neighbors can
    /// have gained or lost eligibility, so refreshing that neighborhood
    /// produces the same set [`rebuild_from`](ActiveSet::rebuild_from)
    /// would.
    pub fn update_after_commit(&mut self, changed: &[Coord], grid: &Grid) {
        for &coord in changed {
            self.refresh(grid, coord);
            for n in grid.neighbours(coord) {
                self.refresh(grid, n);
            }
        }
    }

    fn refresh(&mut self, grid: &Grid, coord: Coord) {
        if Self::is_eligible(grid, coord) {
            self.members.insert(coord);
        } else {
            self.members.shift_remove(&coord);
        }
    }

    /// Whether `coord` is currently a member.
    pub fn contains(&self, coord: Coord) -> bool {
        self.members.contains(&coord)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate members in deterministic (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.members.iter().copied()
    }

    /// Members in row-major order, for order-insensitive comparisons.
    pub fn to_sorted_vec(&self) -> Vec<Coord> {
        let mut v: Vec<Coord> = self.members.iter().copied().collect();
        v.sort();
        v
    }
}
