//! Fleet ownership and the dispatch heuristic.

use lift_core::floor::GROUND_FLOOR;
use lift_core::{Direction, ElevatorId, Floor, PassengerId};

use crate::{Elevator, FleetError, FleetResult, Passenger, PassengerStore};

/// Initial placement of one elevator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ElevatorSpec {
    pub capacity:  usize,
    pub floor:     Floor,
    pub direction: Direction,
}

impl ElevatorSpec {
    /// Ground floor, heading up.
    pub fn new(capacity: usize) -> Self {
        Self { capacity, floor: GROUND_FLOOR, direction: Direction::Up }
    }

    pub fn at(mut self, floor: Floor, direction: Direction) -> Self {
        self.floor = floor;
        self.direction = direction;
        self
    }
}

/// A passenger delivered during [`ElevatorControlSystem::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Exit {
    pub passenger: PassengerId,
    pub elevator:  ElevatorId,
    pub floor:     Floor,
}

/// Owns the fleet and decides which elevator serves each request.
///
/// # Dispatch heuristic
///
/// Only elevators with a free slot are candidates.
///
/// 1. **Directional pass**: the nearest candidate already heading toward the
///    passenger's origin (up with the origin above, down with it below).
/// 2. **Fallback pass**: if no candidate is heading that way, the nearest
///    candidate regardless of direction.
///
/// Distance is `|current_floor - origin|`.  Ties go to the elevator earliest
/// in fleet order.
pub struct ElevatorControlSystem {
    fleet: Vec<Elevator>,
}

impl ElevatorControlSystem {
    /// Build a fleet from placements.  `ElevatorId(i)` is `specs[i]`.
    pub fn new(specs: &[ElevatorSpec]) -> FleetResult<Self> {
        let fleet = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let id = ElevatorId::try_from(i)
                    .map_err(|_| FleetError::FleetTooLarge(specs.len()))?;
                Ok(Elevator::placed(id, spec.capacity, spec.floor, spec.direction))
            })
            .collect::<FleetResult<Vec<_>>>()?;
        Ok(Self { fleet })
    }

    /// `count` identical elevators on the ground floor, heading up.
    pub fn uniform(count: u16, capacity: usize) -> Self {
        let fleet = (0..count)
            .map(|i| Elevator::new(ElevatorId(i), capacity))
            .collect();
        Self { fleet }
    }

    #[inline]
    pub fn fleet(&self) -> &[Elevator] {
        &self.fleet
    }

    #[inline]
    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.fleet.get(id.index())
    }

    /// Passengers currently riding any elevator.
    pub fn riding(&self) -> usize {
        self.fleet.iter().map(Elevator::load).sum()
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Choose an elevator for a request from `origin` without boarding.
    ///
    /// Returns `None` when every elevator is full.
    pub fn select(&self, origin: Floor) -> Option<ElevatorId> {
        self.nearest(origin, true)
            .or_else(|| self.nearest(origin, false))
    }

    /// Choose an elevator for `passenger` and board it there.
    ///
    /// Returns the chosen elevator, or `None` if the passenger is not waiting
    /// or no elevator has room.  On `None` the passenger is left untouched.
    pub fn assign(&mut self, passenger: &mut Passenger) -> Option<ElevatorId> {
        if !passenger.is_waiting() {
            return None;
        }
        let id = self.select(passenger.origin())?;
        match self.fleet[id.index()].board(passenger) {
            Ok(()) => {
                log::debug!("{} boarded {id} ({} → {})",
                    passenger.id(), passenger.origin(), passenger.destination());
                Some(id)
            }
            Err(e) => {
                log::warn!("boarding {} on {id} failed: {e}", passenger.id());
                None
            }
        }
    }

    /// Step every elevator once, in fleet order.
    pub fn step(&mut self, passengers: &mut PassengerStore) -> Vec<Exit> {
        let mut exits = Vec::new();
        for elevator in &mut self.fleet {
            let delivered = elevator.step(passengers);
            let floor = elevator.current_floor();
            exits.extend(delivered.into_iter().map(|passenger| Exit {
                passenger,
                elevator: elevator.id(),
                floor,
            }));
        }
        exits
    }

    fn nearest(&self, origin: Floor, require_heading: bool) -> Option<ElevatorId> {
        let mut best: Option<ElevatorId> = None;
        let mut best_distance = u32::MAX;
        for elevator in &self.fleet {
            if !elevator.has_capacity() {
                continue;
            }
            if require_heading && !elevator.is_heading_toward(origin) {
                continue;
            }
            let distance = elevator.distance_to(origin);
            if distance < best_distance {
                best_distance = distance;
                best = Some(elevator.id());
            }
        }
        best
    }
}
