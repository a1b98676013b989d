//! `lift-fleet` — passengers, elevators, and the dispatch heuristic.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`passenger`] | `Passenger`, `PassengerPhase`, `PassengerStore`            |
//! | [`elevator`]  | `Elevator` — position, direction, riders, pending stops    |
//! | [`control`]   | `ElevatorControlSystem`, `ElevatorSpec`, `Exit`            |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                             |
//!
//! # Passenger lifecycle
//!
//! ```text
//! Waiting ──assign──▶ Boarded(elevator) ──reaches destination──▶ Exited
//!    ▲  │
//!    └──┘ assign returned None (wait_ticks keeps counting)
//! ```
//!
//! Passengers live in a [`PassengerStore`] owned by the simulation driver.
//! Elevators only record `(PassengerId, destination)` pairs, and a boarded
//! passenger points back at its elevator through an `ElevatorId` handle, so
//! there is no shared ownership between the two.

pub mod control;
pub mod elevator;
pub mod error;
pub mod passenger;


pub use control::{ElevatorControlSystem, ElevatorSpec, Exit};
pub use elevator::Elevator;
pub use error::{FleetError, FleetResult};
pub use passenger::{Passenger, PassengerPhase, PassengerStore};
