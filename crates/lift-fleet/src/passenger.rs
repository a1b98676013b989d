//! Passengers and the store that owns them.

use lift_core::floor::GROUND_FLOOR;
use lift_core::{ElevatorId, Floor, PassengerId};

use crate::{FleetError, FleetResult};

/// Where a passenger is in its journey.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PassengerPhase {
    /// On its origin floor, not yet in an elevator.
    Waiting,
    /// Riding the given elevator.
    Boarded(ElevatorId),
    /// Delivered to its destination.  Terminal.
    Exited,
}

/// A single trip request.
///
/// Origin and destination are fixed at construction.  `wait_ticks` only grows
/// while the passenger is [`Waiting`][PassengerPhase::Waiting].
#[derive(Clone, Debug, PartialEq)]
pub struct Passenger {
    id:          PassengerId,
    origin:      Floor,
    destination: Floor,
    phase:       PassengerPhase,
    wait_ticks:  u64,
}

impl Passenger {
    /// Create a waiting passenger.
    ///
    /// Fails with [`FleetError::InvalidFloor`] if either floor is below the
    /// ground floor or the two are equal.
    pub fn new(id: PassengerId, origin: Floor, destination: Floor) -> FleetResult<Self> {
        if origin < GROUND_FLOOR || destination < GROUND_FLOOR || origin == destination {
            return Err(FleetError::InvalidFloor { origin, destination });
        }
        Ok(Self {
            id,
            origin,
            destination,
            phase: PassengerPhase::Waiting,
            wait_ticks: 0,
        })
    }

    #[inline]
    pub fn id(&self) -> PassengerId {
        self.id
    }

    #[inline]
    pub fn origin(&self) -> Floor {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    #[inline]
    pub fn phase(&self) -> PassengerPhase {
        self.phase
    }

    #[inline]
    pub fn wait_ticks(&self) -> u64 {
        self.wait_ticks
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.phase == PassengerPhase::Waiting
    }

    #[inline]
    pub fn is_boarded(&self) -> bool {
        matches!(self.phase, PassengerPhase::Boarded(_))
    }

    #[inline]
    pub fn has_exited(&self) -> bool {
        self.phase == PassengerPhase::Exited
    }

    /// The elevator this passenger is riding, if any.
    pub fn assigned_elevator(&self) -> Option<ElevatorId> {
        match self.phase {
            PassengerPhase::Boarded(e) => Some(e),
            _ => None,
        }
    }

    /// Count one tick of waiting.  No-op unless the passenger is waiting.
    #[inline]
    pub fn tick_wait(&mut self) {
        if self.is_waiting() {
            self.wait_ticks += 1;
        }
    }

    pub(crate) fn mark_boarded(&mut self, elevator: ElevatorId) {
        self.phase = PassengerPhase::Boarded(elevator);
    }

    pub(crate) fn mark_exited(&mut self) {
        self.phase = PassengerPhase::Exited;
    }
}

// ── PassengerStore ────────────────────────────────────────────────────────────

/// Every passenger spawned during a run, indexed by [`PassengerId`].
///
/// Exited passengers are kept so their wait times can be reported.
#[derive(Default, Debug)]
pub struct PassengerStore {
    passengers: Vec<Passenger>,
}

impl PassengerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a passenger with the next free id and store it.
    ///
    /// Nothing is stored if the floors are invalid.
    pub fn spawn(&mut self, origin: Floor, destination: Floor) -> FleetResult<PassengerId> {
        let id = PassengerId(self.passengers.len() as u32);
        let passenger = Passenger::new(id, origin, destination)?;
        self.passengers.push(passenger);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.passengers.get_mut(id.index())
    }

    /// Like [`get_mut`][Self::get_mut] but reports a missing id as an error.
    pub fn passenger_mut(&mut self, id: PassengerId) -> FleetResult<&mut Passenger> {
        self.get_mut(id).ok_or(FleetError::UnknownPassenger(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Ids of all waiting passengers, oldest first.
    pub fn waiting_ids(&self) -> Vec<PassengerId> {
        self.passengers
            .iter()
            .filter(|p| p.is_waiting())
            .map(Passenger::id)
            .collect()
    }

    /// Add one tick of waiting to every passenger still waiting.
    ///
    /// Returns how many passengers are waiting.
    pub fn tick_waits(&mut self) -> usize {
        let mut waiting = 0;
        for p in self.passengers.iter_mut().filter(|p| p.is_waiting()) {
            p.tick_wait();
            waiting += 1;
        }
        waiting
    }
}
