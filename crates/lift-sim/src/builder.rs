//! Fluent builder for constructing a [`Sim`].

use lift_core::{SimClock, SimConfig, SimRng};
use lift_fleet::{ElevatorControlSystem, ElevatorSpec, PassengerStore};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                             |
/// |------------------|-----------------------------------------------------|
/// | `.elevators(v)`  | `elevator_count` cars on floor 1, heading up        |
/// | `.rng(r)`        | `SimRng::new(config.seed)`                          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .elevators(vec![ElevatorSpec::new(8).at(16, Direction::Down)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    elevators: Option<Vec<ElevatorSpec>>,
    rng:       Option<SimRng>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            elevators: None,
            rng:       None,
        }
    }

    /// Supply an explicit placement for each elevator.
    ///
    /// Must be length `config.elevator_count`.  Each spec's capacity is used
    /// as given, so fleets may mix car sizes.
    pub fn elevators(mut self, specs: Vec<ElevatorSpec>) -> Self {
        self.elevators = Some(specs);
        self
    }

    /// Supply the random source instead of seeding from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, build the fleet, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let expected = self.config.elevator_count as usize;

        let control = match self.elevators {
            Some(specs) => {
                if specs.len() != expected {
                    return Err(SimError::ElevatorCountMismatch {
                        expected,
                        got: specs.len(),
                    });
                }
                if let Some(i) = specs.iter().position(|s| s.capacity == 0) {
                    return Err(SimError::Config(format!("elevator {i} has zero capacity")));
                }
                ElevatorControlSystem::new(&specs)?
            }
            None => ElevatorControlSystem::uniform(
                self.config.elevator_count,
                self.config.elevator_capacity,
            ),
        };

        if self.config.floor_count < 2 && self.config.arrival_probability > 0.0 {
            log::warn!(
                "a building with {} floor(s) cannot produce trips; no passengers will spawn",
                self.config.floor_count
            );
        }

        let seed = self.config.seed;
        Ok(Sim {
            clock:        SimClock::new(self.config.total_ticks),
            rng:          self.rng.unwrap_or_else(|| SimRng::new(seed)),
            config:       self.config,
            control,
            passengers:   PassengerStore::new(),
            pending:      Vec::new(),
            wait_samples: Vec::new(),
        })
    }
}
