//! Floors and travel direction.

/// A building floor.  Floors are numbered from 1; `0` is never a valid floor.
pub type Floor = u32;

/// Lowest valid floor number.
pub const GROUND_FLOOR: Floor = 1;

/// The direction an elevator is travelling (or last travelled, when idle).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// `true` if `target` lies strictly ahead of `from` when travelling in
    /// this direction.
    #[inline]
    pub fn is_ahead(self, from: Floor, target: Floor) -> bool {
        match self {
            Direction::Up   => target > from,
            Direction::Down => target < from,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
