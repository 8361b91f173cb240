//! Bounded 2D cell grid for the vivarium Game of Life engine.
//!
//! [`Grid`] owns the full array of cells, exposes bounds-checked
//! coordinate access and 8-connected neighbor enumeration, and supports
//! bulk [`snapshot()`](Grid::snapshot)/[`restore()`](Grid::restore) for
//! the persistence boundary. Out-of-range coordinates are rejected with
//! [`GridError::OutOfBounds`], never silently clamped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod snapshot;

pub use error::GridError;
pub use grid::Grid;
pub use snapshot::GridSnapshot;
