//! Background thread driving an engine in real time.
//!
//! [`Runner::spawn`] moves a freshly set-up [`LifeEngine`] onto a
//! dedicated thread that finishes the seeding walk and then commits one
//! generation per tick interval. Shutdown is cooperative: the flag is
//! checked between seeding steps and between generations, never
//! mid-commit, so the engine handed back by
//! [`RunnerHandle::shutdown`] is always in a consistent committed
//! state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use vivarium_core::{CellEvent, CellSink, Coord};

use crate::config::SimConfig;
use crate::engine::{LifeEngine, SeedProgress};
use crate::error::EngineError;

/// Spawns and owns the simulation thread.
pub struct Runner;

impl Runner {
    /// Set up an engine for `config` and drive it on a new thread.
    ///
    /// Setup runs on the calling thread so configuration errors are
    /// reported synchronously. The spawned thread seeds the board
    /// (pausing `seed_step_interval` between cells when nonzero), then
    /// loops committing a generation every `tick_interval` until
    /// shutdown is requested or the engine reports an error.
    ///
    /// # Errors
    ///
    /// [`EngineError::Config`] if `config` fails validation.
    pub fn spawn(
        config: SimConfig,
        sink: Box<dyn CellSink + Send>,
    ) -> Result<RunnerHandle, EngineError> {
        let mut engine = LifeEngine::new();
        engine.setup(config.clone())?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);

        let thread = thread::spawn(move || {
            Self::drive(engine, &config, sink.as_ref(), &flag)
        });

        Ok(RunnerHandle { shutdown, thread })
    }

    fn drive(
        mut engine: LifeEngine,
        config: &SimConfig,
        sink: &dyn CellSink,
        flag: &AtomicBool,
    ) -> LifeEngine {
        while !flag.load(Ordering::Acquire) {
            match engine.seed_step(sink) {
                Ok(SeedProgress::Visited(_)) => {
                    if !config.seed_step_interval.is_zero() {
                        thread::sleep(config.seed_step_interval);
                    }
                }
                Ok(SeedProgress::Complete) => break,
                Err(_) => return engine,
            }
        }

        while !flag.load(Ordering::Acquire) {
            let started = Instant::now();
            if engine.step_generation(sink).is_err() {
                break;
            }
            if flag.load(Ordering::Acquire) {
                break;
            }
            if let Some(remaining) = config.tick_interval.checked_sub(started.elapsed()) {
                thread::sleep(remaining);
            }
        }
        engine
    }
}

/// Handle to a running simulation thread.
pub struct RunnerHandle {
    shutdown: Arc<AtomicBool>,
    thread: JoinHandle<LifeEngine>,
}

impl RunnerHandle {
    /// Request cooperative shutdown without waiting for it.
    pub fn request_shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
    }

    /// Request shutdown and wait for the thread, recovering the engine.
    ///
    /// # Errors
    ///
    /// Propagates the thread's panic payload if the simulation thread
    /// panicked.
    pub fn shutdown(self) -> thread::Result<LifeEngine> {
        self.shutdown.store(true, Ordering::Release);
        self.thread.join()
    }

    /// Whether the simulation thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }
}

/// A [`CellSink`] that forwards events over an unbounded channel.
///
/// Sending never blocks. If the receiver has been dropped, events are
/// silently discarded; the simulation keeps running, presentation has
/// simply gone away.
pub struct ChannelSink {
    tx: Sender<CellEvent>,
}

impl ChannelSink {
    /// Create a sink and the receiver that drains it.
    pub fn new() -> (Self, Receiver<CellEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl CellSink for ChannelSink {
    fn on_cell_state(&self, coord: Coord, alive: bool) {
        let _ = self.tx.send(CellEvent { coord, alive });
    }
}
