//! The `Sim` struct and its tick loop.

use lift_core::{Floor, PassengerId, RetryPolicy, SimClock, SimConfig, SimRng, Tick};
use lift_fleet::{ElevatorControlSystem, FleetError, PassengerStore};

use crate::{SimObserver, SimReport, SimResult, TickSummary, WaitStats};

/// The main simulation runner.
///
/// Holds the whole simulation state and drives the four-phase tick loop
/// documented at the crate root.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (floors, fleet size, arrival rate, …).
    pub config: SimConfig,

    /// Tracks the current tick and the end of the run.
    pub clock: SimClock,

    /// The run's only random source.
    pub rng: SimRng,

    /// The fleet and the dispatch heuristic.
    pub control: ElevatorControlSystem,

    /// Every passenger spawned so far.
    pub passengers: PassengerStore,

    /// Passengers to offer to the control system on the next dispatch phase,
    /// oldest first.
    pub(crate) pending: Vec<PassengerId>,

    /// Final wait times of delivered passengers, in delivery order.
    pub(crate) wait_samples: Vec<u64>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to the end of the run and return the report.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        log::debug!("running {} ticks, clock at {}", self.clock.remaining(), self.clock);
        while !self.clock.is_finished() {
            self.tick_once(observer)?;
        }
        let report = self.report();
        observer.on_sim_end(self.clock.current_tick, &report);
        Ok(report)
    }

    /// Run exactly `n` ticks from the current position (ignores the end tick).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick_once(observer)?;
        }
        Ok(())
    }

    /// Inject a passenger outside the random arrival process.
    ///
    /// The passenger joins the dispatch queue for the next tick.
    pub fn add_passenger(&mut self, origin: Floor, destination: Floor) -> SimResult<PassengerId> {
        let id = self.passengers.spawn(origin, destination)?;
        self.pending.push(id);
        Ok(id)
    }

    /// Aggregate the results so far.
    ///
    /// Only delivered passengers contribute to the wait-time statistics;
    /// passengers still waiting or riding are counted separately.
    pub fn report(&self) -> SimReport {
        let waiting = self.passengers.iter().filter(|p| p.is_waiting()).count();
        SimReport {
            ticks:   self.clock.current_tick.0,
            wait:    WaitStats::from_samples(self.wait_samples.iter().copied()),
            spawned: self.passengers.len(),
            exited:  self.wait_samples.len(),
            waiting,
            riding:  self.control.riding(),
        }
    }

    /// Final wait times of every delivered passenger, in delivery order.
    pub fn wait_samples(&self) -> &[u64] {
        &self.wait_samples
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_once<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now, observer)?;
        observer.on_tick_end(now, &summary);
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickSummary> {
        let mut summary = TickSummary::default();

        // ── Phase 1: arrivals ─────────────────────────────────────────────
        summary.spawned = self.spawn_passengers(now, observer);

        // ── Phase 2: dispatch ─────────────────────────────────────────────
        //
        // Carried-over passengers come first, so older requests get the
        // first pick of free elevators.
        let offered = std::mem::take(&mut self.pending);
        for id in offered {
            let passenger = self.passengers.passenger_mut(id)?;
            match self.control.assign(passenger) {
                Some(elevator) => {
                    summary.boarded += 1;
                    observer.on_passenger_boarded(now, passenger, elevator);
                }
                None if self.config.retry == RetryPolicy::EveryTick => {
                    self.pending.push(id);
                }
                None => {
                    log::debug!("{id} rejected at {now}; not retrying");
                }
            }
        }

        // ── Phase 3: motion ───────────────────────────────────────────────
        let exits = self.control.step(&mut self.passengers);
        summary.exited = exits.len();
        for exit in &exits {
            let passenger = self
                .passengers
                .get(exit.passenger)
                .ok_or(FleetError::UnknownPassenger(exit.passenger))?;
            log::debug!(
                "{} left {} at floor {} after waiting {} ticks",
                exit.passenger, exit.elevator, exit.floor, passenger.wait_ticks()
            );
            self.wait_samples.push(passenger.wait_ticks());
            observer.on_passenger_exited(now, passenger, exit);
        }

        // ── Phase 4: waiting ──────────────────────────────────────────────
        summary.waiting = self.passengers.tick_waits();
        summary.riding = self.control.riding();

        Ok(summary)
    }

    /// Roll for a new passenger on every floor.  Returns how many spawned.
    fn spawn_passengers<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let floor_count = self.config.floor_count;
        let probability = self.config.arrival_probability;
        let mut spawned = 0;

        for origin in 1..=floor_count {
            if self.rng.unit() >= probability {
                continue;
            }
            let Some(destination) = self.rng.destination_floor(origin, floor_count) else {
                continue;
            };
            match self.passengers.spawn(origin, destination) {
                Ok(id) => {
                    spawned += 1;
                    self.pending.push(id);
                    if let Some(passenger) = self.passengers.get(id) {
                        observer.on_passenger_spawned(now, passenger);
                    }
                }
                Err(e) => log::warn!("skipping passenger at {now}: {e}"),
            }
        }
        spawned
    }
}
