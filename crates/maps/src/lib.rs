//! Cobweb plots of cardiac restitution and phase maps.
//!
//! This crate iterates one-dimensional maps and shapes the results into chart
//! data:
//!
//! - [`restitution`] — exponential restitution maps under periodic pacing
//! - [`phase`] — the piecewise-linear phase map for modulated parasystole
//! - [`trajectory`] — iterate any [`Map`] from an initial condition
//! - [`sample`] — dense curve sampling with discontinuity masking
//! - [`figure`] — cobweb staircases, sequences, and chart containers
//! - [`config`] — scenarios and their defaults
//!
//! [`recompute`] ties these together: given a [`Scenario`], it returns every
//! chart the presentation layer draws.
//!
//! # Example
//!
//! ```
//! use cobweb_maps::{Scenario, recompute};
//!
//! let figures = recompute(&Scenario::default())?;
//! assert_eq!(figures.trajectory.states()[0], 150.0);
//! # Ok::<(), cobweb_maps::trajectory::Error>(())
//! ```
//!
//! [`Map`]: cobweb_core::Map

pub mod config;
pub mod figure;
pub mod phase;
pub mod restitution;
pub mod sample;
pub mod trajectory;

mod recompute;

pub use config::{ConfigError, Iterations, ModelConfig, Scenario};
pub use recompute::{CURVE_POINTS, Figures, recompute};
