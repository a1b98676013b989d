//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PassengerRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors returned here never reach the simulation.  The observer stores
/// them; retrieve the first one with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of delivered passengers.
    fn write_passengers(&mut self, rows: &[PassengerRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
