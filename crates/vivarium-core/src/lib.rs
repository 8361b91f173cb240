//! Core types and traits for the vivarium Game of Life engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the vivarium workspace:
//! grid coordinates, the generation counter, the cell data model with
//! its staged-transition record, and the presentation-sink trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod sink;

pub use cell::{Cell, Transition};
pub use coord::{Coord, Generation};
pub use sink::{CellEvent, CellSink, NullSink};
