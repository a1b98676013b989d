//! `lift-sim` — tick loop driver for the lift dispatch simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Arrivals — for every floor, with probability arrival_probability,
//!                spawn a passenger bound for a random other floor.
//!   ② Dispatch — offer waiting passengers to the control system, oldest
//!                first.  RetryPolicy::EveryTick re-offers rejected
//!                passengers on later ticks; RetryPolicy::Once does not.
//!   ③ Motion   — step every elevator; record the wait time of everyone
//!                delivered.
//!   ④ Waiting  — add one tick of wait to every passenger still waiting.
//! ```
//!
//! Wait-time samples are appended as passengers exit and aggregated once
//! into a [`SimReport`] at the end of the run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{report}");
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::Sim;
pub use stats::{SimReport, WaitStats};
