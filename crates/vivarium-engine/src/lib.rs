//! Generation engine for the vivarium Game of Life simulation.
//!
//! [`LifeEngine`] drives the Idle → Seeding → Running state machine:
//! the [`Seeder`] incrementally populates the grid one coordinate per
//! step, then generations advance under the classic Life rule. Each
//! generation is evaluated in two phases — every candidate cell is read
//! against the committed pre-generation state and its change staged,
//! and only then are all staged changes committed together — so no
//! cell's update can corrupt its neighbors' updates within the same
//! generation.
//!
//! Evaluation is restricted to the [`ActiveSet`] (cells that are alive
//! or adjacent to a live cell), an optimization that provably cannot
//! change results versus full-grid evaluation.
//!
//! [`Runner`] wraps the engine in a background thread with cooperative
//! cancellation checked between generations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod active_set;
pub mod config;
pub mod engine;
pub mod error;
pub mod runner;
pub mod seeder;

pub use active_set::ActiveSet;
pub use config::{ConfigError, SimConfig};
pub use engine::{GenerationSummary, LifeEngine, Phase, SeedProgress};
pub use error::EngineError;
pub use runner::{ChannelSink, Runner, RunnerHandle};
pub use seeder::Seeder;
