//! Interactive cobweb plots for restitution and phase maps.
//!
//! [`CobwebApp`] wraps the chart data produced by [`cobweb_maps::recompute`]
//! in an egui window with one slider per parameter.

mod app;
mod chart;
mod load;

pub use app::CobwebApp;
pub use load::{LoadError, load_scenario};

use cobweb_maps::Scenario;

/// Opens a native window showing `scenario` and blocks until it is closed.
#[allow(clippy::missing_errors_doc)]
pub fn run(scenario: Scenario) -> Result<(), eframe::Error> {
    let app = CobwebApp::new(scenario);
    log::info!("opening window for {}", scenario.model.name());

    eframe::run_native(
        "Cobweb analysis",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
