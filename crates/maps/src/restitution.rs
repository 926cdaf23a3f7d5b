//! Cardiac restitution maps.
//!
//! Under periodic pacing, the duration of the next action potential depends
//! on how long the tissue has had to recover, the diastolic interval (DI):
//!
//! ```text
//! APD_{n+1} = R(DI_n),   DI_n = N * ts - APD_n
//! ```
//!
//! where `N` is the smallest stimulus multiplier whose DI exceeds the
//! refractory offset `theta` (see [`Pacing`]). Two restitution functions `R`
//! are provided:
//!
//! - [`ExponentialRestitution`] — `R(DI) = y0 + a (1 - exp(-b DI))`
//! - [`SaturatingRestitution`] — `R(DI) = apd_max - alpha exp(-DI / tau)`

mod error;
mod pacing;

pub use error::SearchError;
pub use pacing::{DEFAULT_MAX_MULTIPLIER, Pacing};

use cobweb_core::Map;
use serde::{Deserialize, Serialize};

use crate::sample::Sampling;

/// A closed-form restitution curve driven by periodic pacing.
pub trait Restitution {
    /// Returns the action potential duration that follows a diastolic interval.
    fn apd(&self, di: f64) -> f64;

    /// Returns the pacing protocol.
    fn pacing(&self) -> &Pacing;

    /// Applies one beat of the restitution map.
    ///
    /// Non-finite durations have no diastolic interval and yield `NaN`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Exhausted`] if no stimulus captures the beat.
    fn next_apd(&self, apd: f64) -> Result<f64, SearchError> {
        if !apd.is_finite() {
            return Ok(f64::NAN);
        }
        let di = self.pacing().diastolic_interval(apd)?;
        Ok(self.apd(di))
    }
}

/// Exponential restitution in absolute form.
///
/// `R(DI) = y0 + a (1 - exp(-b DI))`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialRestitution {
    /// APD at zero diastolic interval (ms).
    pub y0: f64,

    /// Amplitude of recovery (ms).
    pub a: f64,

    /// Recovery rate (1/ms).
    pub b: f64,

    #[serde(default)]
    pub pacing: Pacing,
}

impl ExponentialRestitution {
    pub const DEFAULT: Self = Self {
        y0: 120.0,
        a: 96.9,
        b: 0.0104,
        pacing: Pacing::DEFAULT,
    };
}

impl Default for ExponentialRestitution {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Restitution for ExponentialRestitution {
    fn apd(&self, di: f64) -> f64 {
        self.y0 + self.a * (1.0 - (-self.b * di).exp())
    }

    fn pacing(&self) -> &Pacing {
        &self.pacing
    }
}

impl Map for ExponentialRestitution {
    type Error = SearchError;

    fn evaluate(&self, state: f64) -> Result<f64, SearchError> {
        self.next_apd(state)
    }
}

// The absolute form is drawn without masking its pacing discontinuities.
impl Sampling for ExponentialRestitution {
    fn discontinuity_threshold(&self) -> Option<f64> {
        None
    }
}

/// Exponential restitution saturating at a maximum duration.
///
/// `R(DI) = apd_max - alpha exp(-DI / tau)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaturatingRestitution {
    /// Duration approached at long diastolic intervals (ms).
    #[serde(alias = "apdmax")]
    pub apd_max: f64,

    /// Depth of the recovery deficit (ms).
    pub alpha: f64,

    /// Recovery time constant (ms).
    pub tau: f64,

    #[serde(default)]
    pub pacing: Pacing,
}

impl SaturatingRestitution {
    pub const DEFAULT: Self = Self {
        apd_max: 216.9,
        alpha: 96.9,
        tau: 96.2,
        pacing: Pacing::DEFAULT,
    };
}

impl Default for SaturatingRestitution {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Restitution for SaturatingRestitution {
    fn apd(&self, di: f64) -> f64 {
        self.apd_max - self.alpha * (-di / self.tau).exp()
    }

    fn pacing(&self) -> &Pacing {
        &self.pacing
    }
}

impl Map for SaturatingRestitution {
    type Error = SearchError;

    fn evaluate(&self, state: f64) -> Result<f64, SearchError> {
        self.next_apd(state)
    }
}

impl Sampling for SaturatingRestitution {
    fn discontinuity_threshold(&self) -> Option<f64> {
        Some(1.0)
    }
}
