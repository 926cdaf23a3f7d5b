use std::ops::RangeInclusive;

use eframe::egui;

use cobweb_maps::{
    Figures, Iterations, ModelConfig, Scenario, recompute,
    restitution::{ExponentialRestitution, Pacing, SaturatingRestitution},
};

use crate::chart;

const CHART_HEIGHT: f32 = 360.0;

/// An interactive cobweb plot driven by parameter sliders.
///
/// Every parameter change rebuilds the charts from scratch with
/// [`recompute`]; nothing else is cached between frames.
pub struct CobwebApp {
    scenario: Scenario,
    figures: Result<Figures, String>,
}

impl CobwebApp {
    /// Creates the app and computes the initial charts for `scenario`.
    #[must_use]
    pub fn new(scenario: Scenario) -> Self {
        let figures = compute(&scenario);
        Self { scenario, figures }
    }

    /// Returns the scenario currently shown.
    #[must_use]
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Returns the current charts, or the message of the last failure.
    pub fn figures(&self) -> Result<&Figures, &str> {
        self.figures.as_ref().map_err(String::as_str)
    }

    /// Replaces the scenario and recomputes the charts.
    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.scenario = scenario;
        self.figures = compute(&self.scenario);
    }

    /// Switches to another map variant with its default initial condition.
    ///
    /// Keeps the current iteration count.
    pub fn select_model(&mut self, model: ModelConfig) {
        self.set_scenario(Scenario {
            iterations: self.scenario.iterations,
            ..Scenario::for_model(model)
        });
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Cobweb analysis");
        ui.add_space(8.0);

        let current = self.scenario.model;
        let current_kind = std::mem::discriminant(&current);
        let mut selected = None;
        egui::ComboBox::from_label("Model")
            .selected_text(current.name())
            .show_ui(ui, |ui| {
                for model in ModelConfig::ALL {
                    let is_current = std::mem::discriminant(&model) == current_kind;
                    if ui.selectable_label(is_current, model.name()).clicked() && !is_current {
                        selected = Some(model);
                    }
                }
            });
        if let Some(model) = selected {
            self.select_model(model);
            return;
        }

        ui.add_space(8.0);
        let mut scenario = self.scenario;
        let mut changed = false;

        let initial_range = match scenario.model {
            ModelConfig::Phase => 0.0..=1.0,
            _ => 0.0..=250.0,
        };
        changed |= slider(ui, &mut scenario.initial, initial_range, "initial condition");

        let mut iterations = scenario.iterations.get();
        if ui
            .add(egui::Slider::new(&mut iterations, 0..=100).text("# iterations"))
            .changed()
        {
            scenario.iterations = Iterations::new(iterations);
            changed = true;
        }

        ui.separator();
        changed |= match &mut scenario.model {
            ModelConfig::Exponential(model) => exponential_controls(ui, model),
            ModelConfig::Saturating(model) => saturating_controls(ui, model),
            ModelConfig::Phase => {
                ui.label("φ' = 3/2 φ for 0 ≤ φ < 2/3");
                ui.label("φ' = 3/2 φ − 1 for 2/3 ≤ φ < 1");
                false
            }
        };

        if ui.button("Reset").clicked() {
            scenario = Scenario {
                iterations: scenario.iterations,
                ..Scenario::for_model(default_like(scenario.model))
            };
            changed = true;
        }

        if changed {
            self.set_scenario(scenario);
        }

        if let Err(message) = &self.figures {
            ui.add_space(8.0);
            ui.colored_label(ui.visuals().error_fg_color, message.as_str());
        }
    }

    fn charts(&self, ui: &mut egui::Ui) {
        let figures = match &self.figures {
            Ok(figures) => figures,
            Err(_) => {
                ui.centered_and_justified(|ui| ui.label("No charts for these parameters."));
                return;
            }
        };

        ui.columns(2, |columns| {
            match &figures.restitution {
                Some(restitution) => chart::show(&mut columns[0], restitution, CHART_HEIGHT),
                None => chart::show(&mut columns[0], &figures.sequence, CHART_HEIGHT),
            }
            chart::show(&mut columns[1], &figures.cobweb, CHART_HEIGHT);
        });

        if figures.restitution.is_some() {
            ui.add_space(8.0);
            chart::show(ui, &figures.sequence, CHART_HEIGHT * 0.6);
        }
    }
}

impl Default for CobwebApp {
    fn default() -> Self {
        Self::new(Scenario::default())
    }
}

impl eframe::App for CobwebApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.charts(ui));
    }
}

fn compute(scenario: &Scenario) -> Result<Figures, String> {
    match recompute(scenario) {
        Ok(figures) => {
            log::debug!(
                "recomputed {} with {} iterations from {}",
                scenario.model.name(),
                scenario.iterations.get(),
                scenario.initial
            );
            Ok(figures)
        }
        Err(err) => {
            log::warn!("recompute failed for {}: {err}", scenario.model.name());
            Err(err.to_string())
        }
    }
}

/// Returns the default parameters of the same variant as `model`.
fn default_like(model: ModelConfig) -> ModelConfig {
    match model {
        ModelConfig::Exponential(_) => ModelConfig::Exponential(ExponentialRestitution::default()),
        ModelConfig::Saturating(_) => ModelConfig::Saturating(SaturatingRestitution::default()),
        ModelConfig::Phase => ModelConfig::Phase,
    }
}

fn slider(ui: &mut egui::Ui, value: &mut f64, range: RangeInclusive<f64>, text: &str) -> bool {
    ui.add(egui::Slider::new(value, range).text(text)).changed()
}

fn exponential_controls(ui: &mut egui::Ui, model: &mut ExponentialRestitution) -> bool {
    ui.label("APD' = y0 + a (1 − exp(−b DI))");
    let mut changed = slider(ui, &mut model.y0, 0.0..=200.0, "y0");
    changed |= slider(ui, &mut model.a, 0.0..=200.0, "a");
    changed |= slider(ui, &mut model.b, 0.005..=0.05, "b");
    changed | pacing_controls(ui, &mut model.pacing)
}

fn saturating_controls(ui: &mut egui::Ui, model: &mut SaturatingRestitution) -> bool {
    ui.label("APD' = APDmax − α exp(−DI / τ)");
    let mut changed = slider(ui, &mut model.apd_max, 0.0..=300.0, "APDmax");
    changed |= slider(ui, &mut model.alpha, 0.0..=200.0, "α");
    changed |= slider(ui, &mut model.tau, 10.0..=300.0, "τ");
    changed | pacing_controls(ui, &mut model.pacing)
}

fn pacing_controls(ui: &mut egui::Ui, pacing: &mut Pacing) -> bool {
    let mut changed = slider(ui, &mut pacing.theta, 0.0..=50.0, "θ");
    changed |= slider(ui, &mut pacing.period, 100.0..=500.0, "ts");
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_charts() {
        let app = CobwebApp::default();
        let figures = app.figures().expect("defaults should compute");

        assert_eq!(figures.trajectory.len(), 41);
        assert!(figures.restitution.is_some());
    }

    #[test]
    fn selecting_a_model_resets_initial_condition() {
        let mut app = CobwebApp::new(Scenario {
            iterations: Iterations::new(7),
            ..Scenario::default()
        });

        app.select_model(ModelConfig::Phase);

        assert_eq!(app.scenario().model, ModelConfig::Phase);
        assert_eq!(app.scenario().initial, 0.2);
        assert_eq!(app.scenario().iterations.get(), 7);
        assert!(app.figures().unwrap().restitution.is_none());
    }

    #[test]
    fn failures_are_kept_as_messages() {
        let mut app = CobwebApp::default();
        let model = ExponentialRestitution {
            pacing: Pacing {
                period: 1.0,
                ..Pacing::default()
            },
            ..ExponentialRestitution::default()
        };

        app.set_scenario(Scenario::for_model(ModelConfig::Exponential(model)));

        let message = app.figures().unwrap_err();
        assert!(message.contains("step 1"), "{message}");

        app.set_scenario(Scenario::default());
        assert!(app.figures().is_ok());
    }

    #[test]
    fn default_like_keeps_the_variant() {
        let model = SaturatingRestitution {
            tau: 12.0,
            ..SaturatingRestitution::default()
        };

        assert_eq!(
            default_like(ModelConfig::Saturating(model)),
            ModelConfig::Saturating(SaturatingRestitution::default())
        );
    }
}
