//! Chart-ready data for cobweb, sequence, and restitution plots.
//!
//! Builders in this module only reshape data. A [`Chart`] carries everything
//! a renderer needs (titles, axis labels, view ranges, and traces) without
//! depending on any particular plotting library.

mod series;

pub use series::{cobweb_series, diagonal, restitution_curve, sequence_series};

use crate::sample::{CurveSample, segments};

/// What a trace depicts, which determines how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// The function being iterated or its restitution curve.
    Curve,

    /// The `y = x` reference line.
    Diagonal,

    /// Iterates of the map.
    Trajectory,
}

/// A named line on a chart, possibly broken into segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub kind: TraceKind,
    points: Vec<Option<[f64; 2]>>,
}

impl Trace {
    /// Creates a trace from coordinate pairs.
    ///
    /// Pairs with a non-finite coordinate become gaps.
    #[must_use]
    pub fn from_pairs(name: impl Into<String>, kind: TraceKind, pairs: &[[f64; 2]]) -> Self {
        let points = pairs
            .iter()
            .map(|&[x, y]| (x.is_finite() && y.is_finite()).then_some([x, y]))
            .collect();

        Self {
            name: name.into(),
            kind,
            points,
        }
    }

    /// Creates a trace from a sampled curve, keeping its undefined points as gaps.
    #[must_use]
    pub fn from_sample(name: impl Into<String>, kind: TraceKind, sample: CurveSample) -> Self {
        Self {
            name: name.into(),
            kind,
            points: sample.into_points(),
        }
    }

    /// Returns the points, with gaps as `None`.
    #[must_use]
    pub fn points(&self) -> &[Option<[f64; 2]>] {
        &self.points
    }

    /// Returns the contiguous runs of defined points, one line each.
    #[must_use]
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        segments(&self.points)
    }
}

/// A titled chart with labeled axes and a set of traces.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// Initial x view range, or `None` to fit the data.
    pub x_range: Option<[f64; 2]>,

    /// Initial y view range, or `None` to fit the data.
    pub y_range: Option<[f64; 2]>,

    pub traces: Vec<Trace>,
}

impl Chart {
    /// Creates an empty chart that fits its view to the data.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_range: None,
            y_range: None,
            traces: Vec::new(),
        }
    }

    /// Fixes the initial view to the given ranges.
    #[must_use]
    pub fn with_view(mut self, x_range: [f64; 2], y_range: [f64; 2]) -> Self {
        self.x_range = Some(x_range);
        self.y_range = Some(y_range);
        self
    }

    /// Appends a trace.
    #[must_use]
    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.traces.push(trace);
        self
    }

    /// Returns the first trace of the given kind.
    #[must_use]
    pub fn trace(&self, kind: TraceKind) -> Option<&Trace> {
        self.traces.iter().find(|trace| trace.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sample::{Grid, sample_fn};

    #[test]
    fn non_finite_pairs_become_gaps() {
        let trace = Trace::from_pairs(
            "iterates",
            TraceKind::Trajectory,
            &[[0.0, 1.0], [1.0, f64::NAN], [f64::INFINITY, 2.0], [2.0, 3.0]],
        );

        assert_eq!(
            trace.points(),
            [Some([0.0, 1.0]), None, None, Some([2.0, 3.0])]
        );
        assert_eq!(trace.segments(), vec![vec![[0.0, 1.0]], vec![[2.0, 3.0]]]);
    }

    #[test]
    fn sample_gaps_are_kept() {
        let grid = Grid::from(vec![0.0, 1.0, 2.0]);
        let sample = sample_fn(&grid, |x| if x < 1.5 { x } else { 50.0 }, Some(1.0));

        let trace = Trace::from_sample("curve", TraceKind::Curve, sample);

        assert_eq!(trace.points(), [Some([0.0, 0.0]), None, None]);
    }

    #[test]
    fn chart_builder() {
        let chart = Chart::new("Cobweb", "x", "y")
            .with_view([0.0, 1.0], [0.0, 2.0])
            .with_trace(Trace::from_pairs("diagonal", TraceKind::Diagonal, &diagonal([0.0, 1.0])));

        assert_eq!(chart.x_range, Some([0.0, 1.0]));
        assert_eq!(chart.y_range, Some([0.0, 2.0]));
        assert!(chart.trace(TraceKind::Diagonal).is_some());
        assert!(chart.trace(TraceKind::Curve).is_none());
    }
}
