//! lift-run — command-line runner for the lift dispatch simulator.
//!
//! Loads a TOML configuration, runs the simulation to completion and prints
//! the wait-time report.  With `--output DIR` every delivered passenger and
//! every tick summary is also written to disk.
//!
//! ```text
//! RUST_LOG=debug lift-run demos/lift-run/lift.toml --seed 7 --output out/
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use lift_core::{SimConfig, Tick};
use lift_fleet::{Exit, Passenger};
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_sim::{SimBuilder, SimObserver, SimReport, TickSummary};

#[derive(Parser)]
#[command(name = "lift-run")]
#[command(about = "Run the elevator dispatch simulation")]
#[command(version)]
struct Cli {
    /// TOML configuration file; defaults are used if it does not exist
    #[arg(default_value = "lift.toml")]
    config: PathBuf,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Directory for per-passenger and per-tick output files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write `output.db` instead of CSV files (needs the `sqlite` feature)
    #[arg(long, requires = "output")]
    sqlite: bool,

    /// Log progress every N ticks (0 disables)
    #[arg(long, default_value = "100")]
    progress: u64,
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Logs a progress line every `interval` ticks and forwards every hook to an
/// optional output observer.
struct Progress<W: OutputWriter> {
    interval: u64,
    output:   Option<SimOutputObserver<W>>,
}

impl<W: OutputWriter> SimObserver for Progress<W> {
    fn on_passenger_exited(&mut self, tick: Tick, passenger: &Passenger, exit: &Exit) {
        if let Some(out) = &mut self.output {
            out.on_passenger_exited(tick, passenger, exit);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        if self.interval > 0 && tick.0 % self.interval == 0 {
            log::info!("{tick}: {} waiting, {} riding", summary.waiting, summary.riding);
        }
        if let Some(out) = &mut self.output {
            out.on_tick_end(tick, summary);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, report: &SimReport) {
        if let Some(out) = &mut self.output {
            out.on_sim_end(final_tick, report);
        }
    }
}

fn run<W: OutputWriter>(config: SimConfig, interval: u64, writer: Option<W>) -> Result<SimReport> {
    let mut sim = SimBuilder::new(config).build()?;
    let mut obs = Progress {
        interval,
        output: writer.map(SimOutputObserver::new),
    };

    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    log::info!("simulation complete in {:.3} s", t0.elapsed().as_secs_f64());

    if let Some(e) = obs.output.as_mut().and_then(SimOutputObserver::take_error) {
        log::error!("output error: {e}");
    }
    Ok(report)
}

#[cfg(feature = "sqlite")]
fn run_sqlite(config: SimConfig, interval: u64, dir: &Path) -> Result<SimReport> {
    let writer = lift_output::SqliteWriter::new(dir)?;
    run(config, interval, Some(writer))
}

#[cfg(not(feature = "sqlite"))]
fn run_sqlite(_config: SimConfig, _interval: u64, _dir: &Path) -> Result<SimReport> {
    anyhow::bail!("--sqlite requires lift-run to be built with the `sqlite` feature")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let mut config = SimConfig::load(&cli.config)?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(ticks) = cli.ticks {
        config = config.with_total_ticks(ticks);
    }
    log::info!(
        "{} floors, {} elevator(s) of capacity {}, arrival probability {}, {} ticks, seed {}",
        config.floor_count,
        config.elevator_count,
        config.elevator_capacity,
        config.arrival_probability,
        config.total_ticks,
        config.seed,
    );

    let report = match &cli.output {
        None => run::<CsvWriter>(config, cli.progress, None)?,
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            if cli.sqlite {
                run_sqlite(config, cli.progress, dir)?
            } else {
                run(config, cli.progress, Some(CsvWriter::new(dir)?))?
            }
        }
    };

    println!("{report}");
    Ok(())
}
