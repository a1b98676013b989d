//! `lift-output` — simulation output writers for the lift dispatch simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                                  |
//! |-----------|-------------|------------------------------------------------|
//! | *(none)*  | CSV         | `passengers.csv`, `tick_summaries.csv`         |
//! | `sqlite`  | SQLite      | `output.db`                                    |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `lift_sim::SimObserver`.  One passenger row is written
//! per delivered passenger, carrying its final wait time, so the files hold
//! exactly the samples the end-of-run statistics are computed from.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PassengerRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
