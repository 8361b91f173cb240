//! Error types for grid construction and access.

use std::fmt;

use vivarium_core::Coord;

/// Errors arising from grid construction, access, or restore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension, or one whose
    /// cell count does not fit in `usize`.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A coordinate is outside the grid extent.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A restore was attempted with a snapshot of different dimensions.
    /// The grid is left untouched.
    ShapeMismatch {
        /// Width of the grid being restored into.
        expected_width: u32,
        /// Height of the grid being restored into.
        expected_height: u32,
        /// Width carried by the snapshot.
        found_width: u32,
        /// Height carried by the snapshot.
        found_height: u32,
    },
    /// A snapshot's cell buffer does not match its declared dimensions.
    SnapshotLength {
        /// Expected number of cells (`width * height`).
        expected: usize,
        /// Number of cells actually provided.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            Self::OutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(f, "coordinate {coord} out of bounds [0, {width}) x [0, {height})")
            }
            Self::ShapeMismatch {
                expected_width,
                expected_height,
                found_width,
                found_height,
            } => {
                write!(
                    f,
                    "snapshot shape {found_width}x{found_height} does not match grid \
                     {expected_width}x{expected_height}"
                )
            }
            Self::SnapshotLength { expected, found } => {
                write!(f, "snapshot holds {found} cells, dimensions require {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}
