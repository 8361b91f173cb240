//! Simulation configuration and validation.

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Default per-cell probability of starting alive.
pub const DEFAULT_SEED_PROBABILITY: f64 = 1.0 / 6.0;

/// Default pause between committed generations.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(15);

/// Inputs for constructing a simulation.
///
/// Validated by [`validate()`](SimConfig::validate) before any grid is
/// allocated. The tick and seed-step intervals are caller policy — the
/// engine itself never sleeps; only [`Runner`](crate::runner::Runner)
/// consumes them.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Grid width, must be > 0.
    pub width: u32,
    /// Grid height, must be > 0.
    pub height: u32,
    /// Independent per-cell probability of starting alive, in `[0, 1]`.
    pub seed_probability: f64,
    /// RNG seed for reproducible seeding.
    pub seed: u64,
    /// Pause between generations when driven by a [`Runner`](crate::runner::Runner).
    pub tick_interval: Duration,
    /// Pause between seeding steps when driven by a `Runner`.
    pub seed_step_interval: Duration,
}

impl SimConfig {
    /// A config with the given dimensions and every other field at its
    /// default.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDimensions`] if either dimension is zero.
    /// - [`ConfigError::InvalidProbability`] if `seed_probability` is
    ///   NaN or outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.seed_probability.is_finite()
            || !(0.0..=1.0).contains(&self.seed_probability)
        {
            return Err(ConfigError::InvalidProbability {
                value: self.seed_probability,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            seed_probability: DEFAULT_SEED_PROBABILITY,
            seed: 0,
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed_step_interval: Duration::ZERO,
        }
    }
}

/// Errors from configuration validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The seeding probability is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions {width}x{height}: both must be > 0")
            }
            Self::InvalidProbability { value } => {
                write!(f, "seed probability {value} outside [0, 1]")
            }
        }
    }
}

impl Error for ConfigError {}
