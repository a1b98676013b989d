//! Wait-time aggregation and the end-of-run report.

use std::fmt;

/// Summary of a collection of wait-time samples.
///
/// An empty collection reports zeros everywhere rather than NaN.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct WaitStats {
    pub count:    usize,
    pub average:  f64,
    pub longest:  u64,
    pub shortest: u64,
}

impl WaitStats {
    /// Aggregate `samples` in a single pass.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut count = 0usize;
        let mut total = 0u64;
        let mut longest = 0u64;
        let mut shortest = u64::MAX;
        for sample in samples {
            count += 1;
            total += sample;
            longest = longest.max(sample);
            shortest = shortest.min(sample);
        }
        if count == 0 {
            return Self::default();
        }
        Self {
            count,
            average: total as f64 / count as f64,
            longest,
            shortest,
        }
    }
}

/// Final results of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    /// Ticks simulated.
    pub ticks:    u64,
    /// Wait times of every passenger that reached its destination.
    pub wait:     WaitStats,
    pub spawned:  usize,
    pub exited:   usize,
    /// Passengers never picked up.
    pub waiting:  usize,
    /// Passengers still on board when the run ended.
    pub riding:   usize,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        // Debug keeps the fractional part of whole numbers: `4.0`, not `4`.
        writeln!(f, "Average Wait Time: {:?}", self.wait.average)?;
        writeln!(f, "Longest Wait Time: {}", self.wait.longest)?;
        writeln!(f, "Shortest Wait Time: {}", self.wait.shortest)?;
        write!(
            f,
            "Passengers: {} spawned, {} delivered, {} waiting, {} riding ({} ticks)",
            self.spawned, self.exited, self.waiting, self.riding, self.ticks
        )
    }
}
