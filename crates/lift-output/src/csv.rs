//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `passengers.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, PassengerRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    passengers: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut passengers = Writer::from_path(dir.join("passengers.csv"))?;
        passengers.write_record([
            "passenger_id", "origin", "destination", "elevator_id", "wait_ticks", "exit_tick",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "spawned", "boarded", "exited", "waiting", "riding"])?;

        Ok(Self {
            passengers,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_passengers(&mut self, rows: &[PassengerRow]) -> OutputResult<()> {
        for row in rows {
            self.passengers.write_record(&[
                row.passenger_id.to_string(),
                row.origin.to_string(),
                row.destination.to_string(),
                row.elevator_id.to_string(),
                row.wait_ticks.to_string(),
                row.exit_tick.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.spawned.to_string(),
            row.boarded.to_string(),
            row.exited.to_string(),
            row.waiting.to_string(),
            row.riding.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.passengers.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
