//! The generation state machine.

use std::fmt;

use vivarium_core::{CellSink, Coord, Generation, Transition};
use vivarium_grid::{Grid, GridSnapshot};

use crate::active_set::ActiveSet;
use crate::config::SimConfig;
use crate::error::EngineError;
use crate::seeder::Seeder;

/// The externally observable lifecycle phase of a [`LifeEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No board exists yet.
    Idle,
    /// A board exists and the seeding walk is in progress.
    Seeding,
    /// Seeding is finished and generations can advance.
    Running,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Idle"),
            Self::Seeding => f.write_str("Seeding"),
            Self::Running => f.write_str("Running"),
        }
    }
}

/// Outcome of a single seeding step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedProgress {
    /// One more cell was rolled and reported.
    Visited(Coord),
    /// Every cell has been visited; the engine is Running.
    Complete,
}

/// What a committed generation changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSummary {
    /// The generation that was just committed.
    pub generation: Generation,
    /// Coordinates whose alive state flipped, in evaluation order.
    pub changed: Vec<Coord>,
    /// Cells that went from dead to alive.
    pub births: usize,
    /// Cells that went from alive to dead.
    pub deaths: usize,
}

enum State {
    Idle,
    Seeding { grid: Grid, seeder: Seeder },
    Running { grid: Grid, active: ActiveSet },
}

/// The Life simulation engine.
///
/// Owns the grid and walks the Idle → Seeding → Running lifecycle.
/// Every mutating operation checks the phase and returns a structured
/// [`EngineError`] when called out of order, so a driver never has to
/// track the phase itself.
pub struct LifeEngine {
    state: State,
    generation: Generation,
}

impl LifeEngine {
    /// A fresh engine with no board.
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            generation: Generation(0),
        }
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Seeding { .. } => Phase::Seeding,
            State::Running { .. } => Phase::Running,
        }
    }

    /// The number of committed generations since setup.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The board, if one exists.
    pub fn grid(&self) -> Option<&Grid> {
        match &self.state {
            State::Idle => None,
            State::Seeding { grid, .. } | State::Running { grid, .. } => Some(grid),
        }
    }

    /// Allocate the board and start the seeding walk.
    ///
    /// # Errors
    ///
    /// - [`EngineError::AlreadySetUp`] if a board already exists.
    /// - [`EngineError::Config`] if `config` fails validation.
    pub fn setup(&mut self, config: SimConfig) -> Result<(), EngineError> {
        if !matches!(self.state, State::Idle) {
            return Err(EngineError::AlreadySetUp {
                phase: self.phase(),
            });
        }
        config.validate()?;

        let grid = Grid::new(config.width, config.height)?;
        let seeder = Seeder::new(&config);
        self.state = State::Seeding { grid, seeder };
        self.generation = Generation(0);
        Ok(())
    }

    /// Advance the seeding walk by one cell.
    ///
    /// The visited coordinate is reported through `sink` whether or not
    /// it came up alive. When the walk visits its final cell the engine
    /// transitions to Running in the same call; a further call in the
    /// Running phase returns [`SeedProgress::Complete`] without error.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotSetUp`] if `setup()` has not been called.
    pub fn seed_step(&mut self, sink: &dyn CellSink) -> Result<SeedProgress, EngineError> {
        match &mut self.state {
            State::Idle => Err(EngineError::NotSetUp),
            State::Running { .. } => Ok(SeedProgress::Complete),
            State::Seeding { grid, seeder } => {
                let coord = seeder
                    .step(grid, sink)
                    .expect("seeder in the Seeding phase always has a cursor");
                if seeder.is_complete() {
                    self.promote_to_running();
                }
                Ok(SeedProgress::Visited(coord))
            }
        }
    }

    /// Run the seeding walk to completion in one call.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotSetUp`] if `setup()` has not been called.
    pub fn seed_all(&mut self, sink: &dyn CellSink) -> Result<(), EngineError> {
        loop {
            match self.seed_step(sink)? {
                SeedProgress::Visited(_) => {}
                SeedProgress::Complete => return Ok(()),
            }
        }
    }

    fn promote_to_running(&mut self) {
        let state = std::mem::replace(&mut self.state, State::Idle);
        let State::Seeding { grid, .. } = state else {
            unreachable!("promotion only happens from the Seeding phase");
        };
        let mut active = ActiveSet::new();
        active.rebuild_from(&grid);
        self.state = State::Running { grid, active };
    }

    /// Evaluate and commit one generation.
    ///
    /// Phase one stages a transition for every active cell against the
    /// committed pre-generation state; phase two commits all staged
    /// transitions, reports each flipped cell through `sink`, and
    /// updates the active set. No cell observes a neighbor's new state
    /// within the same generation.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotRunning`] outside the Running phase.
    pub fn step_generation(
        &mut self,
        sink: &dyn CellSink,
    ) -> Result<GenerationSummary, EngineError> {
        let phase = self.phase();
        let State::Running { grid, active } = &mut self.state else {
            return Err(EngineError::NotRunning { phase });
        };

        // Phase 1: stage against the committed state only.
        let candidates: Vec<Coord> = active.iter().collect();
        let mut staged = Vec::new();
        for coord in candidates {
            let alive = grid.is_alive(coord)?;
            let live_neighbours = grid.count_live_neighbours(coord)?;
            let transition = match (alive, live_neighbours) {
                (true, 0..=1) | (true, 4..=8) => Some(Transition::Clear),
                (false, 3) => Some(Transition::Fill),
                _ => None,
            };
            if let Some(transition) = transition {
                grid.stage(coord, transition)?;
                staged.push(coord);
            }
        }

        // Phase 2: commit every staged transition at once.
        let mut changed = Vec::with_capacity(staged.len());
        let mut births = 0;
        let mut deaths = 0;
        for coord in staged {
            let Some(transition) = grid.take_pending(coord)? else {
                continue;
            };
            let alive = matches!(transition, Transition::Fill);
            grid.set_alive(coord, alive)?;
            if alive {
                births += 1;
            } else {
                deaths += 1;
            }
            sink.on_cell_state(coord, alive);
            changed.push(coord);
        }

        active.update_after_commit(&changed, grid);
        self.generation = self.generation.next();

        Ok(GenerationSummary {
            generation: self.generation,
            changed,
            births,
            deaths,
        })
    }

    /// Capture the committed state of the board.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotSetUp`] if no board exists.
    pub fn snapshot(&self) -> Result<GridSnapshot, EngineError> {
        match &self.state {
            State::Idle => Err(EngineError::NotSetUp),
            State::Seeding { grid, .. } | State::Running { grid, .. } => Ok(grid.snapshot()),
        }
    }

    /// Replace the board's committed state with `snapshot`.
    ///
    /// Discards any staged transitions and rebuilds the active set. The
    /// generation counter is not reset; restore changes the board, not
    /// the history.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotRunning`] outside the Running phase.
    /// - [`EngineError::Grid`] on a shape mismatch, in which case the
    ///   board is unchanged.
    pub fn restore(&mut self, snapshot: &GridSnapshot) -> Result<(), EngineError> {
        let phase = self.phase();
        let State::Running { grid, active } = &mut self.state else {
            return Err(EngineError::NotRunning { phase });
        };
        grid.restore(snapshot)?;
        active.rebuild_from(grid);
        Ok(())
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new()
    }
}
