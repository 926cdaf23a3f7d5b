use crate::{
    config::{ModelConfig, Scenario},
    figure::{Chart, Trace, TraceKind, cobweb_series, diagonal, restitution_curve, sequence_series},
    phase::PhaseMap,
    restitution::Restitution,
    sample::{Grid, Sampling, sample_map},
    trajectory::{self, Trajectory},
};

/// Number of grid points used for every sampled curve.
pub const CURVE_POINTS: usize = 1000;

/// The charts produced by a single recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Figures {
    /// Map curve, diagonal, and cobweb staircase.
    pub cobweb: Chart,

    /// Iterates against their index.
    pub sequence: Chart,

    /// Restitution curve, for the restitution variants only.
    pub restitution: Option<Chart>,

    /// The trajectory the charts were built from.
    pub trajectory: Trajectory,
}

/// Where a variant's curve is sampled and how its cobweb chart is framed.
struct Layout {
    domain: [f64; 2],
    view: [f64; 2],
    x_label: &'static str,
    y_label: &'static str,
    state_label: &'static str,
}

const RESTITUTION_LAYOUT: Layout = Layout {
    domain: [0.0, 600.0],
    view: [0.0, 250.0],
    x_label: "APDᵢ (ms)",
    y_label: "APDᵢ₊₁ (ms)",
    state_label: "APD (ms)",
};

const PHASE_LAYOUT: Layout = Layout {
    domain: [0.0, 1.0],
    view: [0.0, 1.0],
    x_label: "φᵢ",
    y_label: "φᵢ₊₁",
    state_label: "φ",
};

const DI_DOMAIN: [f64; 2] = [0.0, 300.0];
const APD_VIEW: [f64; 2] = [50.0, 250.0];

/// Recomputes every chart for a scenario.
///
/// Each call is independent: the trajectory and curves are rebuilt from
/// scratch and nothing is retained between calls.
///
/// # Errors
///
/// Returns an error if the trajectory cannot be generated, which happens
/// when a restitution map finds no capturing stimulus.
pub fn recompute(scenario: &Scenario) -> Result<Figures, trajectory::Error> {
    match scenario.model {
        ModelConfig::Exponential(model) => restitution_figures(&model, scenario),
        ModelConfig::Saturating(model) => restitution_figures(&model, scenario),
        ModelConfig::Phase => map_figures(&PhaseMap, scenario, &PHASE_LAYOUT, None),
    }
}

fn restitution_figures<R>(model: &R, scenario: &Scenario) -> Result<Figures, trajectory::Error>
where
    R: Restitution + Sampling,
{
    let grid = Grid::linspace(DI_DOMAIN[0], DI_DOMAIN[1], CURVE_POINTS);
    let chart = Chart::new("Restitution curve", "DI (ms)", "APD (ms)")
        .with_view(DI_DOMAIN, APD_VIEW)
        .with_trace(Trace::from_sample(
            "APD = R(DI)",
            TraceKind::Curve,
            restitution_curve(&grid, model),
        ));

    map_figures(model, scenario, &RESTITUTION_LAYOUT, Some(chart))
}

fn map_figures<M: Sampling>(
    map: &M,
    scenario: &Scenario,
    layout: &Layout,
    restitution: Option<Chart>,
) -> Result<Figures, trajectory::Error> {
    let trajectory =
        trajectory::generate_unobserved(map, scenario.initial, scenario.iterations.get())?;

    let grid = Grid::linspace(layout.domain[0], layout.domain[1], CURVE_POINTS);
    let cobweb = Chart::new("Cobweb plot", layout.x_label, layout.y_label)
        .with_view(layout.view, layout.view)
        .with_trace(Trace::from_sample(
            "map",
            TraceKind::Curve,
            sample_map(&grid, map),
        ))
        .with_trace(Trace::from_pairs(
            "y = x",
            TraceKind::Diagonal,
            &diagonal(layout.domain),
        ))
        .with_trace(Trace::from_pairs(
            "cobweb",
            TraceKind::Trajectory,
            &cobweb_series(trajectory.states()),
        ));

    let sequence = Chart::new("Trajectory", "iteration", layout.state_label).with_trace(
        Trace::from_pairs(
            "iterates",
            TraceKind::Trajectory,
            &sequence_series(trajectory.states()),
        ),
    );

    Ok(Figures {
        cobweb,
        sequence,
        restitution,
        trajectory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        config::Iterations,
        restitution::{ExponentialRestitution, Pacing, SaturatingRestitution},
    };

    fn curve_gaps(chart: &Chart) -> usize {
        chart
            .trace(TraceKind::Curve)
            .map_or(0, |trace| trace.points().iter().filter(|p| p.is_none()).count())
    }

    #[test]
    fn default_scenario_builds_all_charts() {
        let figures = recompute(&Scenario::default()).unwrap();

        assert_eq!(figures.trajectory.len(), 41);
        assert_eq!(figures.cobweb.traces.len(), 3);
        assert_eq!(figures.cobweb.x_range, Some([0.0, 250.0]));
        assert!(figures.restitution.is_some());

        let cobweb = figures.cobweb.trace(TraceKind::Trajectory).unwrap();
        assert_eq!(cobweb.points().len(), 2 * 41 - 1);

        let sequence = figures.sequence.trace(TraceKind::Trajectory).unwrap();
        assert_eq!(sequence.points().len(), 41);
    }

    #[test]
    fn exponential_curve_is_not_masked() {
        let figures = recompute(&Scenario::default()).unwrap();
        assert_eq!(curve_gaps(&figures.cobweb), 0);
    }

    #[test]
    fn saturating_curve_is_masked() {
        let scenario = Scenario::for_model(ModelConfig::Saturating(SaturatingRestitution::default()));
        let figures = recompute(&scenario).unwrap();

        assert_eq!(curve_gaps(&figures.cobweb), 2);
        assert_eq!(curve_gaps(figures.restitution.as_ref().unwrap()), 0);
    }

    #[test]
    fn phase_scenario_has_no_restitution_chart() {
        let scenario = Scenario {
            iterations: Iterations::new(2),
            ..Scenario::for_model(ModelConfig::Phase)
        };

        let figures = recompute(&scenario).unwrap();

        assert!(figures.restitution.is_none());
        assert_eq!(figures.cobweb.x_range, Some([0.0, 1.0]));
        assert_eq!(figures.trajectory.len(), 3);
        assert_eq!(curve_gaps(&figures.cobweb), 2);
    }

    #[test]
    fn failing_map_is_reported() {
        let model = ExponentialRestitution {
            pacing: Pacing {
                period: 5.0,
                ..Pacing::default()
            },
            ..ExponentialRestitution::default()
        };

        let err = recompute(&Scenario::for_model(ModelConfig::Exponential(model))).unwrap_err();
        assert_eq!(err.step(), 1);
    }

    #[test]
    fn recompute_is_idempotent() {
        let scenario = Scenario::default();
        assert_eq!(recompute(&scenario).unwrap(), recompute(&scenario).unwrap());
    }
}
