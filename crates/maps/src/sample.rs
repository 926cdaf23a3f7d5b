//! Dense sampling of map and restitution curves for plotting.
//!
//! A sampled curve is a sequence of grid points, each either a plottable
//! `(x, y)` pair or undefined. Points become undefined when:
//!
//! - the function fails or returns a non-finite value there, or
//! - they bound a jump `|y[i+1] - y[i]|` larger than the discontinuity
//!   threshold, so the rendered curve breaks instead of drawing a spurious
//!   vertical connector.

mod grid;

pub use grid::Grid;

use cobweb_core::Map;

/// How a map's curve is sampled for plotting.
pub trait Sampling: Map {
    /// Jump size above which adjacent samples are treated as a discontinuity.
    ///
    /// `None` disables masking.
    fn discontinuity_threshold(&self) -> Option<f64>;
}

/// A curve sampled over a [`Grid`], with undefined points as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSample {
    points: Vec<Option<[f64; 2]>>,
}

impl CurveSample {
    /// Returns the sampled points, one per grid point.
    #[must_use]
    pub fn points(&self) -> &[Option<[f64; 2]>] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the contiguous runs of defined points.
    #[must_use]
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        segments(&self.points)
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Option<[f64; 2]>> {
        self.points
    }
}

/// Samples a map's own curve, `x ↦ f(x)`, using its discontinuity threshold.
#[must_use]
pub fn sample_map<M: Sampling>(grid: &Grid, map: &M) -> CurveSample {
    sample_with(
        grid,
        |x| map.evaluate(x).ok(),
        map.discontinuity_threshold(),
    )
}

/// Samples an infallible function over a grid.
#[must_use]
pub fn sample_fn(grid: &Grid, f: impl Fn(f64) -> f64, threshold: Option<f64>) -> CurveSample {
    sample_with(grid, |x| Some(f(x)), threshold)
}

fn sample_with(
    grid: &Grid,
    f: impl Fn(f64) -> Option<f64>,
    threshold: Option<f64>,
) -> CurveSample {
    let values: Vec<Option<f64>> = grid
        .points()
        .iter()
        .map(|&x| f(x).filter(|y| y.is_finite()))
        .collect();

    let mut masked = vec![false; values.len()];
    if let Some(threshold) = threshold {
        for (i, pair) in values.windows(2).enumerate() {
            if let [Some(y0), Some(y1)] = pair {
                if (y1 - y0).abs() > threshold {
                    masked[i] = true;
                    masked[i + 1] = true;
                }
            }
        }
    }

    let points = grid
        .points()
        .iter()
        .zip(values)
        .zip(masked)
        .map(|((&x, y), masked)| if masked { None } else { y.map(|y| [x, y]) })
        .collect();

    CurveSample { points }
}

/// Splits points into contiguous runs of defined values.
pub(crate) fn segments(points: &[Option<[f64; 2]>]) -> Vec<Vec<[f64; 2]>> {
    points
        .split(Option::is_none)
        .filter(|run| !run.is_empty())
        .map(|run| run.iter().flatten().copied().collect())
        .collect()
}
