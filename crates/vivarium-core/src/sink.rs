//! The presentation-sink boundary.
//!
//! The engine has no dependency on any rendering or windowing capability.
//! Anything that wants to display cells implements [`CellSink`] and is
//! notified of state changes as they are committed. Calls are
//! fire-and-forget from the engine's perspective; a sink's dispatch
//! mechanism must preserve per-coordinate ordering.

use crate::coord::Coord;

/// A single cell-state notification.
///
/// Emitted once per coordinate visited during seeding and once per
/// coordinate whose state changed at a generation commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellEvent {
    /// The cell that changed.
    pub coord: Coord,
    /// Its new committed state.
    pub alive: bool,
}

/// Receiver for cell-state notifications.
///
/// Implementations must not block the engine indefinitely. The engine
/// never calls back into a sink re-entrantly, and notifications for a
/// given coordinate are issued in commit order.
pub trait CellSink {
    /// A cell at `coord` was created (seeding) or changed state (commit).
    fn on_cell_state(&self, coord: Coord, alive: bool);
}

/// A sink that discards every notification.
///
/// Useful for headless runs and tests that only inspect grid state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl CellSink for NullSink {
    fn on_cell_state(&self, _coord: Coord, _alive: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_accepts_events() {
        let sink = NullSink;
        sink.on_cell_state(Coord::new(0, 0), true);
        sink.on_cell_state(Coord::new(0, 0), false);
    }
}
