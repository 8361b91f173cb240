//! Grid coordinates and the [`Generation`] counter.

use std::fmt;

/// A position on the simulation grid.
///
/// A cell's identity is its coordinate; coordinates are stable for the
/// lifetime of the grid. `Ord` sorts by `x` then `y`, matching the
/// row-major scan order used by the initialization cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index, `0 <= x < width`.
    pub x: u32,
    /// Row index, `0 <= y < height`.
    pub y: u32,
}

impl Coord {
    /// Construct a coordinate from its components.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Monotonically increasing generation counter.
///
/// Incremented each time a full generation of the Life rule is committed.
/// Seeding happens entirely within generation 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
