//! Strongly typed, zero-cost identifier wrappers.
//!
//! A passenger refers to its elevator through an [`ElevatorId`] handle rather
//! than a reference, so the fleet stays the single owner of every elevator.
//! IDs are dense indices: `ElevatorId(i)` is the `i`-th elevator in fleet
//! order, `PassengerId(i)` the `i`-th passenger ever spawned.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a passenger in the simulation's passenger store.
    pub struct PassengerId(u32);
}

typed_id! {
    /// Position of an elevator in the fleet.  Fleet order is fixed at
    /// construction, so this doubles as the tie-break rank.
    pub struct ElevatorId(u16);
}
