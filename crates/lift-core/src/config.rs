//! Simulation configuration and its TOML loader.
//!
//! # File format
//!
//! ```toml
//! floors              = 32
//! elevators           = 1
//! elevator_capacity   = 10
//! arrival_probability = 0.03
//! duration            = 500
//! seed                = 42
//! retry               = "every_tick"   # or "once"
//! structure           = "linked"
//! ```
//!
//! Every key is optional and falls back to its [`Default`] value.  Both the
//! field names and the legacy names used above (`floors`, `elevators`,
//! `duration`, plus `passengers` for the arrival probability,
//! `elevatorCapacity` and `structures`) are accepted.
//!
//! A missing file is not an error: [`SimConfig::load`] logs a warning and
//! returns the defaults.  A file that exists but does not parse, or holds
//! out-of-range values, is rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, Floor};

/// What the driver does with a passenger that no elevator could take.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Re-offer every still-waiting passenger to the control system each tick.
    #[default]
    EveryTick,
    /// Offer each passenger once, at spawn time.  A rejected passenger keeps
    /// waiting until the run ends.
    Once,
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Storage layout label.  Carried for compatibility, ignored by the
    /// simulation.
    #[serde(alias = "structures")]
    pub structure: String,

    /// Number of floors, numbered `1..=floor_count`.
    #[serde(alias = "floors")]
    pub floor_count: Floor,

    /// Per-floor, per-tick probability that a passenger appears.
    #[serde(alias = "passengers")]
    pub arrival_probability: f64,

    /// Fleet size.
    #[serde(alias = "elevators")]
    pub elevator_count: u16,

    /// Maximum simultaneous riders per elevator.
    #[serde(alias = "elevatorCapacity")]
    pub elevator_capacity: usize,

    /// Total ticks to simulate.
    #[serde(alias = "duration")]
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub retry: RetryPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            structure:           "linked".to_owned(),
            floor_count:         32,
            arrival_probability: 0.03,
            elevator_count:      1,
            elevator_capacity:   10,
            total_ticks:         500,
            seed:                42,
            retry:               RetryPolicy::EveryTick,
        }
    }
}

impl SimConfig {
    /// Load from a TOML file, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "configuration file {} not found, using default values",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(CoreError::Io(e)),
        };
        Self::from_toml_str(&text)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is within its allowed range.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floor_count == 0 {
            return Err(CoreError::Config("floor_count must be at least 1".into()));
        }
        if self.elevator_count == 0 {
            return Err(CoreError::Config("elevator_count must be at least 1".into()));
        }
        if self.elevator_capacity == 0 {
            return Err(CoreError::Config("elevator_capacity must be at least 1".into()));
        }
        if self.total_ticks == 0 {
            return Err(CoreError::Config("total_ticks must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(CoreError::Config(format!(
                "arrival_probability {} is outside [0, 1]",
                self.arrival_probability
            )));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_total_ticks(mut self, total_ticks: u64) -> Self {
        self.total_ticks = total_ticks;
        self
    }
}
