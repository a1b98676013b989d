//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_fleet::{Exit, Passenger};
use lift_sim::{SimObserver, SimReport, TickSummary};

use crate::row::{PassengerRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes delivered passengers and tick summaries to
/// any [`OutputWriter`] backend (CSV, SQLite).
///
/// Passengers delivered during a tick are buffered and written as one batch
/// when the tick ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    delivered:  Vec<PassengerRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delivered:  Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_passenger_exited(&mut self, tick: Tick, passenger: &Passenger, exit: &Exit) {
        self.delivered.push(PassengerRow {
            passenger_id: passenger.id().0,
            origin:       passenger.origin(),
            destination:  passenger.destination(),
            elevator_id:  exit.elevator.0,
            wait_ticks:   passenger.wait_ticks(),
            exit_tick:    tick.0,
        });
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        if !self.delivered.is_empty() {
            let rows = std::mem::take(&mut self.delivered);
            let result = self.writer.write_passengers(&rows);
            self.store_err(result);
        }

        let row = TickSummaryRow {
            tick:    tick.0,
            spawned: summary.spawned as u64,
            boarded: summary.boarded as u64,
            exited:  summary.exited as u64,
            waiting: summary.waiting as u64,
            riding:  summary.riding as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _report: &SimReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
