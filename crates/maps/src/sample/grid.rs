/// An ordered grid of input values at which a curve is sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<f64>,
}

impl Grid {
    /// Creates `count` evenly spaced points from `start` to `end`, inclusive.
    ///
    /// A count of one yields `[start]`; a count of zero yields an empty grid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn linspace(start: f64, end: f64, count: usize) -> Self {
        let points = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
                points[count - 1] = end;
                points
            }
        };

        Self { points }
    }

    /// Returns the grid points in order.
    #[must_use]
    pub fn points(&self) -> &[f64] {
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
}

impl From<Vec<f64>> for Grid {
    fn from(points: Vec<f64>) -> Self {
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn linspace_includes_both_ends() {
        let grid = Grid::linspace(0.0, 600.0, 1000);

        assert_eq!(grid.len(), 1000);
        assert_eq!(grid.points()[0], 0.0);
        assert_eq!(grid.points()[999], 600.0);
        assert_relative_eq!(grid.points()[1], 600.0 / 999.0);
    }

    #[test]
    fn degenerate_counts() {
        assert!(Grid::linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(Grid::linspace(3.0, 1.0, 1).points(), [3.0]);
    }
}
