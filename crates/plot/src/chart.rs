//! Rendering of [`Chart`] data with `egui_plot`.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, LineStyle, Plot};

use cobweb_maps::figure::{Chart, TraceKind};

const ROYAL_BLUE: Color32 = Color32::from_rgb(65, 105, 225);

/// How a trace of a given kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Stroke {
    pub color: Color32,
    pub width: f32,
    pub dashed: bool,
}

pub(crate) fn stroke(kind: TraceKind, visuals: &egui::Visuals) -> Stroke {
    match kind {
        TraceKind::Curve => Stroke {
            color: visuals.strong_text_color(),
            width: 1.5,
            dashed: false,
        },
        TraceKind::Diagonal => Stroke {
            color: Color32::GRAY,
            width: 1.0,
            dashed: true,
        },
        TraceKind::Trajectory => Stroke {
            color: ROYAL_BLUE,
            width: 1.5,
            dashed: false,
        },
    }
}

/// Draws a chart, one line per contiguous segment of each trace.
pub(crate) fn show(ui: &mut egui::Ui, chart: &Chart, height: f32) {
    ui.label(egui::RichText::new(chart.title.as_str()).strong());

    let mut plot = Plot::new(&chart.title)
        .height(height)
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .legend(Legend::default());
    if let Some([min, max]) = chart.x_range {
        plot = plot.default_x_bounds(min, max);
    }
    if let Some([min, max]) = chart.y_range {
        plot = plot.default_y_bounds(min, max);
    }

    let visuals = ui.visuals().clone();
    plot.show(ui, |plot_ui| {
        for trace in &chart.traces {
            let stroke = stroke(trace.kind, &visuals);
            for segment in trace.segments() {
                let mut line = Line::new(&trace.name, segment)
                    .color(stroke.color)
                    .width(stroke.width);
                if stroke.dashed {
                    line = line.style(LineStyle::dashed_loose());
                }
                plot_ui.line(line);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_diagonal_is_dashed() {
        let visuals = egui::Visuals::light();

        assert!(stroke(TraceKind::Diagonal, &visuals).dashed);
        assert!(!stroke(TraceKind::Curve, &visuals).dashed);
        assert!(!stroke(TraceKind::Trajectory, &visuals).dashed);
    }

    #[test]
    fn trajectory_is_royal_blue() {
        let visuals = egui::Visuals::dark();
        assert_eq!(stroke(TraceKind::Trajectory, &visuals).color, ROYAL_BLUE);
    }
}
