//! Error types for the generation engine.

use std::error::Error;
use std::fmt;

use vivarium_grid::GridError;

use crate::config::ConfigError;
use crate::engine::Phase;

/// Errors from [`LifeEngine`](crate::engine::LifeEngine) operations.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// The operation requires a board, but `setup()` has not been called.
    NotSetUp,
    /// `setup()` was called again after a board already exists.
    AlreadySetUp {
        /// The phase the engine was in.
        phase: Phase,
    },
    /// The operation is only valid while generations are running.
    NotRunning {
        /// The phase the engine was in.
        phase: Phase,
    },
    /// Configuration validation failed.
    Config(ConfigError),
    /// A grid operation failed (out-of-bounds access or shape mismatch).
    Grid(GridError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSetUp => write!(f, "engine has no board; call setup() first"),
            Self::AlreadySetUp { phase } => {
                write!(f, "engine already set up (phase: {phase})")
            }
            Self::NotRunning { phase } => {
                write!(f, "operation requires the Running phase (phase: {phase})")
            }
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for EngineError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
