use lift_core::CoreError;
use lift_fleet::FleetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("elevator placements length {got} does not match elevator count {expected}")]
    ElevatorCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),
}

pub type SimResult<T> = Result<T, SimError>;
