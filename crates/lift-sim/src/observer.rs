//! Simulation observer trait for progress reporting and data collection.

use lift_core::{ElevatorId, Tick};
use lift_fleet::{Exit, Passenger};

use crate::SimReport;

/// Per-tick counters handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub spawned: usize,
    pub boarded: usize,
    pub exited:  usize,
    /// Passengers waiting after this tick.
    pub waiting: usize,
    /// Passengers aboard any elevator after this tick.
    pub riding:  usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} waiting", summary.waiting);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A new passenger appeared on its origin floor.
    fn on_passenger_spawned(&mut self, _tick: Tick, _passenger: &Passenger) {}

    /// A passenger was assigned to, and boarded, `elevator`.
    fn on_passenger_boarded(&mut self, _tick: Tick, _passenger: &Passenger, _elevator: ElevatorId) {}

    /// A passenger reached its destination.  Its wait time is final.
    fn on_passenger_exited(&mut self, _tick: Tick, _passenger: &Passenger, _exit: &Exit) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
