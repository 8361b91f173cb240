//! The cell data model and its staged-transition record.

use std::fmt;

/// A staged state change for a single cell.
///
/// During evaluation of a generation, the engine records the intended
/// change here instead of mutating [`Cell::alive`] in place. All staged
/// transitions are applied together at commit, so every cell in a
/// generation is evaluated against the same pre-generation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// A dead cell becomes alive (birth).
    Fill,
    /// A live cell dies (under- or over-population).
    Clear,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fill => write!(f, "fill"),
            Self::Clear => write!(f, "clear"),
        }
    }
}

/// A single grid position's state.
///
/// Created once per coordinate at grid construction and never destroyed.
/// `alive` is the committed state; `pending` is the staged next state,
/// present only between evaluation and commit of a generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Current committed state.
    pub alive: bool,
    /// Staged next state, cleared at commit.
    pub pending: Option<Transition>,
}

impl Cell {
    /// A dead cell with no staged transition.
    pub const DEAD: Cell = Cell {
        alive: false,
        pending: None,
    };

    /// A live cell with no staged transition.
    pub const ALIVE: Cell = Cell {
        alive: true,
        pending: None,
    };

    /// The state this cell will have after the staged transition (if any)
    /// is committed.
    pub fn next_alive(&self) -> bool {
        match self.pending {
            Some(Transition::Fill) => true,
            Some(Transition::Clear) => false,
            None => self.alive,
        }
    }
}
