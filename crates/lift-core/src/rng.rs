//! Deterministic simulation RNG.
//!
//! There is no process-wide random state: the simulation owns one `SimRng`
//! seeded from [`SimConfig::seed`][crate::SimConfig::seed], so a given seed
//! and configuration always replay the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Floor;

/// Simulation-level RNG.  Single-threaded only.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Uniform floor in `[1, floor_count]` other than `origin`.
    ///
    /// Draws once from the `floor_count - 1` candidates and skips over
    /// `origin`, so no rejection loop is needed.  Returns `None` when the
    /// building has fewer than two floors.
    pub fn destination_floor(&mut self, origin: Floor, floor_count: Floor) -> Option<Floor> {
        if floor_count < 2 {
            return None;
        }
        let drawn = self.0.gen_range(1..floor_count);
        Some(if drawn >= origin { drawn + 1 } else { drawn })
    }
}
