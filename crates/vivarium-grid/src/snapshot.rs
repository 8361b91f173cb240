//! Owned copies of grid state for the persistence boundary.

use vivarium_core::Coord;

use crate::error::GridError;

/// A full copy of every cell's `alive` bit at one point in time.
///
/// Snapshots carry no staged transitions and no active-set state —
/// both are transient or derivable. Cells are stored in the grid's
/// row-major order (`y` fastest, then `x`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    width: u32,
    height: u32,
    alive: Vec<bool>,
}

impl GridSnapshot {
    /// Build a snapshot from dimensions and a cell buffer.
    ///
    /// Returns [`GridError::InvalidDimensions`] for a zero dimension and
    /// [`GridError::SnapshotLength`] if `alive.len() != width * height`.
    pub fn new(width: u32, height: u32, alive: Vec<bool>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        if alive.len() != expected {
            return Err(GridError::SnapshotLength {
                expected,
                found: alive.len(),
            });
        }
        Ok(Self {
            width,
            height,
            alive,
        })
    }

    /// Internal constructor for buffers already known to be well-shaped.
    pub(crate) fn from_parts(width: u32, height: u32, alive: Vec<bool>) -> Self {
        debug_assert_eq!(alive.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            alive,
        }
    }

    /// Snapshot width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Snapshot height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The alive bits in row-major order.
    pub fn alive(&self) -> &[bool] {
        &self.alive
    }

    /// Number of live cells in the snapshot.
    pub fn population(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    /// The recorded state at `coord`, or `None` outside the extent.
    pub fn is_alive(&self, coord: Coord) -> Option<bool> {
        if coord.x >= self.width || coord.y >= self.height {
            return None;
        }
        Some(self.alive[(coord.x as usize) * (self.height as usize) + coord.y as usize])
    }
}
