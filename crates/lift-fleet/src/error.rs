use lift_core::{ElevatorId, Floor, PassengerId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("invalid floors: origin {origin}, destination {destination}")]
    InvalidFloor {
        origin:      Floor,
        destination: Floor,
    },

    #[error("{0} is full")]
    ElevatorFull(ElevatorId),

    #[error("{0} is not waiting for an elevator")]
    NotWaiting(PassengerId),

    #[error("{0} not found")]
    UnknownPassenger(PassengerId),

    #[error("fleet of {0} elevators exceeds the ElevatorId range")]
    FleetTooLarge(usize),
}

pub type FleetResult<T> = Result<T, FleetError>;
