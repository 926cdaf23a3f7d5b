//! Scenario configuration: which map to iterate, from where, and how far.
//!
//! Every recomputation takes an explicit [`Scenario`]. Defaults reproduce the
//! chart shown before any parameter has been changed.
//!
//! Scenarios deserialize from any serde format. In TOML:
//!
//! ```toml
//! initial = 150
//! iterations = 40
//!
//! [model]
//! kind = "exponential"
//! y0 = 120
//! a = 96.9
//! b = 0.0104
//!
//! [model.pacing]
//! theta = 20
//! period = 400
//! ```
//!
//! The `pacing` table may be omitted to use the default protocol.

use serde::{Deserialize, Serialize};

use crate::restitution::{ExponentialRestitution, SaturatingRestitution};

/// Errors that can occur when validating a scenario.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("iteration count must be non-negative, got {0}")]
    NegativeIterations(i64),
}

/// A validated, non-negative iteration count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Iterations(usize);

impl Iterations {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for Iterations {
    type Error = ConfigError;

    fn try_from(count: i64) -> Result<Self, ConfigError> {
        usize::try_from(count)
            .map(Self)
            .map_err(|_| ConfigError::NegativeIterations(count))
    }
}

impl From<Iterations> for i64 {
    fn from(iterations: Iterations) -> Self {
        i64::try_from(iterations.0).unwrap_or(i64::MAX)
    }
}

impl From<usize> for Iterations {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

/// The map variant to iterate, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelConfig {
    /// Exponential restitution in absolute form.
    Exponential(ExponentialRestitution),

    /// Exponential restitution saturating at `apd_max`.
    Saturating(SaturatingRestitution),

    /// Piecewise-linear phase map.
    Phase,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::Exponential(ExponentialRestitution::default())
    }
}

impl ModelConfig {
    /// All variants with default parameters, in display order.
    pub const ALL: [Self; 3] = [
        Self::Exponential(ExponentialRestitution::DEFAULT),
        Self::Saturating(SaturatingRestitution::DEFAULT),
        Self::Phase,
    ];

    /// Returns a short human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exponential(_) => "Exponential restitution",
            Self::Saturating(_) => "Saturating restitution",
            Self::Phase => "Phase map",
        }
    }

    /// Returns the default initial condition for this variant.
    #[must_use]
    pub fn default_initial(&self) -> f64 {
        match self {
            Self::Exponential(_) | Self::Saturating(_) => 150.0,
            Self::Phase => 0.2,
        }
    }
}

/// Everything needed to recompute the charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Initial condition (APD in ms, or phase).
    pub initial: f64,

    pub iterations: Iterations,

    pub model: ModelConfig,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::for_model(ModelConfig::default())
    }
}

impl Scenario {
    /// Default iteration count.
    pub const DEFAULT_ITERATIONS: Iterations = Iterations::new(40);

    /// Creates a scenario for `model` with its default initial condition.
    #[must_use]
    pub fn for_model(model: ModelConfig) -> Self {
        Self {
            initial: model.default_initial(),
            iterations: Self::DEFAULT_ITERATIONS,
            model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_iterations_are_rejected() {
        assert_eq!(
            Iterations::try_from(-1_i64),
            Err(ConfigError::NegativeIterations(-1))
        );
        assert_eq!(Iterations::try_from(12_i64).map(Iterations::get), Ok(12));
    }

    #[test]
    fn default_scenario_matches_demo() {
        let scenario = Scenario::default();

        assert_eq!(
            scenario.model,
            ModelConfig::Exponential(ExponentialRestitution::default())
        );
        assert_eq!(scenario.initial, 150.0);
        assert_eq!(scenario.iterations.get(), 40);
    }

    #[test]
    fn phase_scenario_starts_inside_unit_interval() {
        let scenario = Scenario::for_model(ModelConfig::Phase);
        assert_eq!(scenario.initial, 0.2);
        assert_eq!(scenario.iterations, Scenario::DEFAULT_ITERATIONS);
    }
}
