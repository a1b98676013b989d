//! The elevator state machine.

use std::collections::{BTreeMap, BTreeSet};

use lift_core::floor::GROUND_FLOOR;
use lift_core::{Direction, ElevatorId, Floor, PassengerId};

use crate::{FleetError, FleetResult, Passenger, PassengerStore};

/// One car in the fleet.
///
/// An elevator moves one floor per [`step`][Self::step], and only while it
/// has pending stops.  Every rider's destination is a pending stop until the
/// elevator reaches it.
///
/// # Direction policy
///
/// The elevator never changes direction on its own.  With pending stops it
/// moves one floor in its current direction; without them it idles.  A car
/// heading down on the ground floor holds position instead of moving.
#[derive(Clone, Debug)]
pub struct Elevator {
    id:            ElevatorId,
    current_floor: Floor,
    direction:     Direction,
    capacity:      usize,
    /// Boarded passengers and their destinations.
    riders:        BTreeMap<PassengerId, Floor>,
    pending_stops: BTreeSet<Floor>,
}

impl Elevator {
    /// An empty elevator on the ground floor, heading up.
    pub fn new(id: ElevatorId, capacity: usize) -> Self {
        Self::placed(id, capacity, GROUND_FLOOR, Direction::Up)
    }

    /// An empty elevator at an arbitrary floor and direction.
    ///
    /// Floors below the ground floor are clamped to it.
    pub fn placed(id: ElevatorId, capacity: usize, floor: Floor, direction: Direction) -> Self {
        Self {
            id,
            current_floor: floor.max(GROUND_FLOOR),
            direction,
            capacity,
            riders: BTreeMap::new(),
            pending_stops: BTreeSet::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn load(&self) -> usize {
        self.riders.len()
    }

    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.riders.len() < self.capacity
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pending_stops.is_empty()
    }

    #[inline]
    pub fn carries(&self, passenger: PassengerId) -> bool {
        self.riders.contains_key(&passenger)
    }

    pub fn riders(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.riders.keys().copied()
    }

    pub fn pending_stops(&self) -> &BTreeSet<Floor> {
        &self.pending_stops
    }

    /// `true` if the elevator is heading toward `floor`: moving up with
    /// `floor` above it, or moving down with `floor` below it.
    #[inline]
    pub fn is_heading_toward(&self, floor: Floor) -> bool {
        self.direction.is_ahead(self.current_floor, floor)
    }

    /// Floors between this elevator and `floor`.
    #[inline]
    pub fn distance_to(&self, floor: Floor) -> u32 {
        self.current_floor.abs_diff(floor)
    }

    // ── Boarding ──────────────────────────────────────────────────────────

    /// Take `passenger` aboard and register its destination as a stop.
    ///
    /// Boarding a passenger that is already aboard succeeds without changing
    /// anything.
    pub fn board(&mut self, passenger: &mut Passenger) -> FleetResult<()> {
        if self.carries(passenger.id()) {
            return Ok(());
        }
        if !passenger.is_waiting() {
            return Err(FleetError::NotWaiting(passenger.id()));
        }
        if !self.has_capacity() {
            return Err(FleetError::ElevatorFull(self.id));
        }
        self.riders.insert(passenger.id(), passenger.destination());
        self.pending_stops.insert(passenger.destination());
        passenger.mark_boarded(self.id);
        Ok(())
    }

    /// Remove `passenger` from the car.  Absent passengers are ignored.
    ///
    /// Returns the passenger's destination if it was aboard.
    pub fn alight(&mut self, passenger: PassengerId) -> Option<Floor> {
        self.riders.remove(&passenger)
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Advance one tick: move one floor in the current direction, then let
    /// out everyone whose destination is the new floor.
    ///
    /// Nothing happens when there are no pending stops, or when the car is
    /// heading down from the ground floor.  Exiting passengers are marked
    /// [`Exited`][crate::PassengerPhase::Exited] in `passengers` and returned
    /// in id order.
    pub fn step(&mut self, passengers: &mut PassengerStore) -> Vec<PassengerId> {
        if self.pending_stops.is_empty() {
            return Vec::new();
        }

        self.current_floor = match self.direction {
            Direction::Up => self.current_floor + 1,
            Direction::Down if self.current_floor > GROUND_FLOOR => self.current_floor - 1,
            Direction::Down => {
                log::debug!("{} held at the ground floor heading down", self.id);
                return Vec::new();
            }
        };

        if !self.pending_stops.contains(&self.current_floor) {
            return Vec::new();
        }
        let exiting = self.unload(passengers);
        self.pending_stops.remove(&self.current_floor);
        exiting
    }

    fn unload(&mut self, passengers: &mut PassengerStore) -> Vec<PassengerId> {
        let here = self.current_floor;
        let exiting: Vec<PassengerId> = self
            .riders
            .iter()
            .filter(|&(_, &dest)| dest == here)
            .map(|(&id, _)| id)
            .collect();

        for &id in &exiting {
            match passengers.get_mut(id) {
                Some(p) => p.mark_exited(),
                None => log::warn!("{} carried unknown {id}", self.id),
            }
            self.alight(id);
        }
        exiting
    }
}
