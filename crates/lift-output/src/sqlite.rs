//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `passengers` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::{OutputResult, PassengerRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS passengers (
                 passenger_id INTEGER PRIMARY KEY,
                 origin       INTEGER NOT NULL,
                 destination  INTEGER NOT NULL,
                 elevator_id  INTEGER NOT NULL,
                 wait_ticks   INTEGER NOT NULL,
                 exit_tick    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick    INTEGER PRIMARY KEY,
                 spawned INTEGER NOT NULL,
                 boarded INTEGER NOT NULL,
                 exited  INTEGER NOT NULL,
                 waiting INTEGER NOT NULL,
                 riding  INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_passengers(&mut self, rows: &[PassengerRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO passengers \
                 (passenger_id, origin, destination, elevator_id, wait_ticks, exit_tick) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.passenger_id,
                    row.origin,
                    row.destination,
                    row.elevator_id,
                    row.wait_ticks as i64,
                    row.exit_tick as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, spawned, boarded, exited, waiting, riding) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.tick as i64,
                row.spawned as i64,
                row.boarded as i64,
                row.exited as i64,
                row.waiting as i64,
                row.riding as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
