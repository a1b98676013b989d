//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is the time an
//! elevator needs to travel one floor; there is no mapping to wall-clock time.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the exclusive end of the run.
#[derive(Clone, Debug)]
pub struct SimClock {
    pub current_tick: Tick,
    pub end_tick:     Tick,
}

impl SimClock {
    /// A clock at tick 0 that finishes after `total_ticks` ticks.
    pub fn new(total_ticks: u64) -> Self {
        Self {
            current_tick: Tick::ZERO,
            end_tick:     Tick(total_ticks),
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.end_tick
    }

    /// Ticks left before `end_tick` (zero once finished).
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.end_tick.0.saturating_sub(self.current_tick.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current_tick, self.end_tick)
    }
}
