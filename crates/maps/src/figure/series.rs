use crate::{
    restitution::Restitution,
    sample::{CurveSample, Grid, sample_fn},
};

/// Builds the cobweb staircase for a trajectory.
///
/// Starts at `(x_0, 0)`, then for each step moves vertically to the map,
/// `(x_i, x_{i+1})`, and horizontally to the diagonal, `(x_{i+1}, x_{i+1})`.
/// An empty trajectory yields an empty series.
#[must_use]
pub fn cobweb_series(states: &[f64]) -> Vec<[f64; 2]> {
    let Some(&first) = states.first() else {
        return Vec::new();
    };

    let mut series = Vec::with_capacity(2 * states.len() - 1);
    series.push([first, 0.0]);
    for pair in states.windows(2) {
        let [current, next] = [pair[0], pair[1]];
        series.push([current, next]);
        series.push([next, next]);
    }
    series
}

/// Pairs each state with its iteration index.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sequence_series(states: &[f64]) -> Vec<[f64; 2]> {
    states
        .iter()
        .enumerate()
        .map(|(i, &state)| [i as f64, state])
        .collect()
}

/// Samples a restitution curve, APD against diastolic interval.
///
/// The curve is closed-form and continuous, so no masking is applied.
#[must_use]
pub fn restitution_curve<R: Restitution>(grid: &Grid, restitution: &R) -> CurveSample {
    sample_fn(grid, |di| restitution.apd(di), None)
}

/// The `y = x` reference line over `range`.
#[must_use]
pub fn diagonal(range: [f64; 2]) -> Vec<[f64; 2]> {
    vec![[range[0], range[0]], [range[1], range[1]]]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::restitution::ExponentialRestitution;

    #[test]
    fn cobweb_staircase() {
        let series = cobweb_series(&[0.2, 0.3, 0.45]);
        assert_eq!(
            series,
            vec![
                [0.2, 0.0],
                [0.2, 0.3],
                [0.3, 0.3],
                [0.3, 0.45],
                [0.45, 0.45],
            ]
        );
    }

    #[test]
    fn cobweb_of_single_state_is_its_foot() {
        assert_eq!(cobweb_series(&[150.0]), vec![[150.0, 0.0]]);
    }

    #[test]
    fn empty_inputs_give_empty_series() {
        assert!(cobweb_series(&[]).is_empty());
        assert!(sequence_series(&[]).is_empty());
    }

    #[test]
    fn sequence_is_indexed_from_zero() {
        assert_eq!(
            sequence_series(&[0.8, 0.2]),
            vec![[0.0, 0.8], [1.0, 0.2]]
        );
    }

    #[test]
    fn restitution_curve_spans_grid() {
        let model = ExponentialRestitution::default();
        let grid = Grid::linspace(0.0, 300.0, 1000);

        let curve = restitution_curve(&grid, &model);

        assert_eq!(curve.len(), 1000);
        assert_eq!(curve.points()[0], Some([0.0, 120.0]));

        let [x, y] = curve.points()[999].unwrap();
        assert_relative_eq!(x, 300.0);
        assert_relative_eq!(y, 120.0 + 96.9 * (1.0 - (-0.0104_f64 * 300.0).exp()));
    }

    #[test]
    fn diagonal_endpoints() {
        assert_eq!(diagonal([0.0, 600.0]), vec![[0.0, 0.0], [600.0, 600.0]]);
    }
}
