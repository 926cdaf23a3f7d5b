use serde::{Deserialize, Serialize};

use super::SearchError;

/// Largest stimulus multiplier tried by default when locating the diastolic interval.
pub const DEFAULT_MAX_MULTIPLIER: u32 = 9;

/// Periodic pacing shared by the restitution maps.
///
/// A cell paced every `period` milliseconds responds to the first stimulus
/// that arrives more than `theta` milliseconds after its action potential
/// ends. Stimuli falling inside the refractory window are blocked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pacing {
    /// Refractory offset (ms).
    pub theta: f64,

    /// Stimulus period (ms).
    pub period: f64,

    /// Largest multiplier `N` tried by [`Pacing::diastolic_interval`].
    #[serde(default = "default_max_multiplier")]
    pub max_multiplier: u32,
}

fn default_max_multiplier() -> u32 {
    DEFAULT_MAX_MULTIPLIER
}

impl Default for Pacing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Pacing {
    pub const DEFAULT: Self = Self {
        theta: 20.0,
        period: 400.0,
        max_multiplier: DEFAULT_MAX_MULTIPLIER,
    };

    /// Returns the diastolic interval that follows an action potential of
    /// duration `apd`.
    ///
    /// Searches `N = 1..=max_multiplier` for the smallest `N` with
    /// `N * period - apd > theta` and returns `N * period - apd`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Exhausted`] if no multiplier in the range
    /// satisfies the condition.
    pub fn diastolic_interval(&self, apd: f64) -> Result<f64, SearchError> {
        (1..=self.max_multiplier)
            .map(|n| f64::from(n) * self.period - apd)
            .find(|&di| di > self.theta)
            .ok_or(SearchError::Exhausted {
                apd,
                theta: self.theta,
                period: self.period,
                max_multiplier: self.max_multiplier,
            })
    }
}
