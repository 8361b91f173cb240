//! Vivarium: a Conway's Game of Life engine with incremental seeding and
//! active-set evaluation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the vivarium sub-crates. For most users, adding `vivarium` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use vivarium::prelude::*;
//!
//! // Set up a 32x32 board and run the whole seeding walk.
//! let mut engine = LifeEngine::new();
//! engine.setup(SimConfig::with_dimensions(32, 32)).unwrap();
//! engine.seed_all(&NullSink).unwrap();
//! assert_eq!(engine.phase(), Phase::Running);
//!
//! // Advance ten generations, observing each committed change.
//! for _ in 0..10 {
//!     let summary = engine.step_generation(&NullSink).unwrap();
//!     println!(
//!         "generation {}: {} births, {} deaths",
//!         summary.generation, summary.births, summary.deaths
//!     );
//! }
//! ```
//!
//! Real-time use goes through [`engine::Runner`], which drives the same
//! state machine on a background thread and streams cell events through
//! a [`engine::ChannelSink`].
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vivarium-core` | Coordinates, cells, generations, the sink trait |
//! | [`grid`] | `vivarium-grid` | The board, staged transitions, snapshots |
//! | [`engine`] | `vivarium-engine` | State machine, seeding, active set, runner |
//! | [`persist`] | `vivarium-persist` | Binary board format and hashing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the presentation-sink trait (`vivarium-core`).
///
/// Contains [`types::Coord`], [`types::Cell`], [`types::Generation`],
/// and the [`types::CellSink`] boundary the engine reports through.
pub use vivarium_core as types;

/// The board and its snapshot form (`vivarium-grid`).
///
/// [`grid::Grid`] owns cell storage and staged transitions;
/// [`grid::GridSnapshot`] is the owned copy the persistence layer works
/// with.
pub use vivarium_grid as grid;

/// The simulation state machine (`vivarium-engine`).
///
/// [`engine::LifeEngine`] for direct (lockstep) stepping,
/// [`engine::Runner`] for autonomous background ticking.
pub use vivarium_engine as engine;

/// Binary board persistence and hashing (`vivarium-persist`).
///
/// Save boards with [`persist::write_snapshot`], load them with
/// [`persist::read_snapshot`], and compare them cheaply with
/// [`persist::snapshot_hash`].
pub use vivarium_persist as persist;

/// Common imports for typical vivarium usage.
///
/// ```rust
/// use vivarium::prelude::*;
/// ```
pub mod prelude {
    // Core types and the sink boundary
    pub use vivarium_core::{Cell, CellEvent, CellSink, Coord, Generation, NullSink, Transition};

    // The board
    pub use vivarium_grid::{Grid, GridError, GridSnapshot};

    // Engine
    pub use vivarium_engine::{
        ChannelSink, EngineError, GenerationSummary, LifeEngine, Phase, Runner, RunnerHandle,
        SeedProgress, SimConfig,
    };

    // Persistence
    pub use vivarium_persist::{read_snapshot, snapshot_hash, write_snapshot, PersistError};
}
