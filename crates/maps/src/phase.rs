use std::convert::Infallible;

use cobweb_core::Map;
use serde::{Deserialize, Serialize};

use crate::sample::Sampling;

/// Piecewise-linear phase map for modulated parasystole.
///
/// ```text
/// φ' = 3/2 φ       for 0 <= φ < 2/3
/// φ' = 3/2 φ - 1   otherwise
/// ```
///
/// Phases outside `[0, 1)` are not clamped; they take the second branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseMap;

impl PhaseMap {
    pub const SLOPE: f64 = 1.5;
    pub const BREAK: f64 = 2.0 / 3.0;
}

impl Map for PhaseMap {
    type Error = Infallible;

    fn evaluate(&self, phi: f64) -> Result<f64, Infallible> {
        if (0.0..Self::BREAK).contains(&phi) {
            Ok(Self::SLOPE * phi)
        } else {
            Ok(Self::SLOPE * phi - 1.0)
        }
    }
}

impl Sampling for PhaseMap {
    fn discontinuity_threshold(&self) -> Option<f64> {
        Some(0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(phi: f64) -> f64 {
        let Ok(next) = PhaseMap.evaluate(phi);
        next
    }

    #[test]
    fn lower_branch_scales() {
        assert_relative_eq!(eval(0.2), 0.3);
        assert_relative_eq!(eval(0.0), 0.0);
    }

    #[test]
    fn upper_branch_wraps() {
        assert_relative_eq!(eval(0.8), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn break_point_takes_upper_branch() {
        let phi = 2.0 / 3.0;
        assert_eq!(eval(phi), 1.5 * phi - 1.0);
    }

    #[test]
    fn out_of_range_phases_fall_through() {
        assert_relative_eq!(eval(-0.2), -1.3);
        assert_relative_eq!(eval(1.2), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn repeated_evaluation_is_deterministic() {
        let phi = 0.37;
        let twice = eval(eval(phi));
        assert_eq!(twice, eval(eval(phi)));

        // 0.555 stays on the lower branch, 0.8325 wraps.
        assert_eq!(twice, 1.5 * (1.5 * phi) - 1.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(eval(f64::NAN).is_nan());
    }
}
