//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PassengerRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn passenger_row(passenger_id: u32, wait_ticks: u64) -> PassengerRow {
        PassengerRow {
            passenger_id,
            origin:      1,
            destination: 4 + passenger_id,
            elevator_id: 0,
            wait_ticks,
            exit_tick:   9,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("passengers.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("passengers.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["passenger_id", "origin", "destination", "elevator_id", "wait_ticks", "exit_tick"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "spawned", "boarded", "exited", "waiting", "riding"]);
    }

    #[test]
    fn csv_passenger_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_passengers(&[passenger_row(0, 3), passenger_row(1, 0)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("passengers.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "4"); // destination
        assert_eq!(&rows[0][4], "3"); // wait_ticks
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][5], "9"); // exit_tick
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 3, spawned: 2, boarded: 1, exited: 0, waiting: 4, riding: 1,
        }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "2", "1", "0", "4", "1"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_is_error() {
        let dir = tmp();
        let missing = dir.path().join("nope");
        assert!(CsvWriter::new(&missing).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use lift_core::SimConfig;
    use lift_sim::{SimBuilder, SimObserver};

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{PassengerRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn quiet_config(total_ticks: u64) -> SimConfig {
        SimConfig {
            floor_count:         10,
            arrival_probability: 0.0,
            elevator_count:      1,
            elevator_capacity:   10,
            total_ticks,
            ..SimConfig::default()
        }
    }

    /// Collects rows in memory; optionally fails every write.
    #[derive(Default)]
    struct MemWriter {
        passengers: Vec<PassengerRow>,
        summaries:  Vec<TickSummaryRow>,
        finishes:   usize,
        fail:       bool,
    }

    impl OutputWriter for MemWriter {
        fn write_passengers(&mut self, rows: &[PassengerRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.passengers.extend_from_slice(rows);
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn delivered_passenger_recorded() {
        let mut sim = SimBuilder::new(quiet_config(10)).build().unwrap();
        sim.add_passenger(1, 5).unwrap();

        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(
            writer.passengers,
            vec![PassengerRow {
                passenger_id: 0,
                origin:       1,
                destination:  5,
                elevator_id:  0,
                wait_ticks:   0,
                exit_tick:    3,
            }]
        );
        assert_eq!(writer.summaries.len(), 10);
        assert_eq!(writer.summaries[0].boarded, 1);
        assert_eq!(writer.summaries[0].riding, 1);
        assert_eq!(writer.summaries[3].exited, 1);
        assert_eq!(writer.summaries[3].riding, 0);
        assert_eq!(writer.finishes, 1);
    }

    #[test]
    fn first_error_kept() {
        let mut sim = SimBuilder::new(quiet_config(5)).build().unwrap();
        sim.add_passenger(2, 3).unwrap();

        let mut obs = SimOutputObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        sim.run(&mut obs).unwrap();

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let config = SimConfig {
            floor_count:         15,
            arrival_probability: 0.1,
            elevator_count:      2,
            elevator_capacity:   5,
            total_ticks:         200,
            seed:                9,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let report = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("passengers.csv")).unwrap();
        let waits: Vec<u64> = rdr
            .records()
            .map(|r| r.unwrap()[4].parse::<u64>().unwrap())
            .collect();
        assert_eq!(waits.len(), report.exited);
        assert_eq!(waits, sim.wait_samples());

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 200);
    }

    #[test]
    fn noop_hooks_untouched() {
        // Hooks the observer does not override must not write anything.
        let mut obs = SimOutputObserver::new(MemWriter::default());
        obs.on_tick_start(lift_core::Tick(0));
        let writer = obs.into_writer();
        assert!(writer.passengers.is_empty());
        assert!(writer.summaries.is_empty());
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{PassengerRow, TickSummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_passenger_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows: Vec<_> = (0..3)
            .map(|i| PassengerRow {
                passenger_id: i, origin: 1, destination: 2 + i, elevator_id: 0, wait_ticks: 1, exit_tick: 4,
            })
            .collect();
        w.write_passengers(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM passengers", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 7, spawned: 2, boarded: 1, exited: 3, waiting: 5, riding: 4,
        }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, exited, waiting): (i64, i64, i64) = conn.query_row(
            "SELECT tick, exited, waiting FROM tick_summaries WHERE tick = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!(tick, 7);
        assert_eq!(exited, 3);
        assert_eq!(waiting, 5);
    }
}
