//! `lift-core` — foundational types for the lift dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `PassengerId`, `ElevatorId`                           |
//! | [`floor`]   | `Floor`, `Direction`                                  |
//! | [`time`]    | `Tick`, `SimClock`                                    |
//! | [`rng`]     | `SimRng` (seeded, single-threaded)                    |
//! | [`config`]  | `SimConfig`, `RetryPolicy`, TOML loading              |
//! | [`error`]   | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RetryPolicy, SimConfig};
pub use error::{CoreError, CoreResult};
pub use floor::{Direction, Floor};
pub use ids::{ElevatorId, PassengerId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
