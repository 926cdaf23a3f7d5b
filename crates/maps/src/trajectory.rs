//! Trajectories of a one-dimensional map.
//!
//! A trajectory starts at an initial condition and applies the map a fixed
//! number of times:
//!
//! ```text
//! x_0 = initial,   x_{k+1} = f(x_k)
//! ```
//!
//! Iteration never stops early. Diverging or non-finite states are carried
//! through unchanged; only a map error ends the iteration.
//!
//! # Example
//!
//! ```
//! use cobweb_maps::{phase::PhaseMap, trajectory};
//!
//! let trajectory = trajectory::generate_unobserved(&PhaseMap, 0.8, 1)?;
//! assert_eq!(trajectory.len(), 2);
//! # Ok::<(), trajectory::Error>(())
//! ```

mod error;
mod event;

pub use error::Error;
pub use event::Event;

use std::convert::Infallible;

use cobweb_core::{Map, Observer};

/// The ordered states visited by a map, starting with the initial condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<f64>,
}

impl Trajectory {
    /// Returns the states in iteration order.
    #[must_use]
    pub fn states(&self) -> &[f64] {
        &self.states
    }

    /// Returns the initial condition.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.states[0]
    }

    /// Returns the last state reached.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.states[self.states.len() - 1]
    }

    /// Returns the number of states, which is one more than the number of iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: a trajectory contains at least its initial condition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn into_states(self) -> Vec<f64> {
        self.states
    }
}

impl AsRef<[f64]> for Trajectory {
    fn as_ref(&self) -> &[f64] {
        &self.states
    }
}

/// Iterates `map` from `initial` for `iterations` steps.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial condition and after
/// each map evaluation. Its action type is uninhabited, so it can watch the
/// iteration but never alter or stop it.
///
/// # Errors
///
/// Returns [`Error::Map`] if the map fails to evaluate a state.
pub fn generate<M, Obs>(
    map: &M,
    initial: f64,
    iterations: usize,
    mut observer: Obs,
) -> Result<Trajectory, Error>
where
    M: Map,
    Obs: Observer<Event, Infallible>,
{
    let mut states = Vec::with_capacity(iterations + 1);
    states.push(initial);
    notify(&mut observer, 0, initial);

    let mut state = initial;
    for step in 1..=iterations {
        state = map.evaluate(state).map_err(|err| Error::map(step, err))?;
        states.push(state);
        notify(&mut observer, step, state);
    }

    Ok(Trajectory { states })
}

/// Iterates `map` from `initial` for `iterations` steps without observation.
///
/// This is a convenience wrapper around [`generate`] that discards events.
///
/// # Errors
///
/// Returns [`Error::Map`] if the map fails to evaluate a state.
pub fn generate_unobserved<M: Map>(
    map: &M,
    initial: f64,
    iterations: usize,
) -> Result<Trajectory, Error> {
    generate(map, initial, iterations, ())
}

fn notify<Obs: Observer<Event, Infallible>>(observer: &mut Obs, step: usize, state: f64) {
    if let Some(never) = observer.observe(&Event { step, state }) {
        match never {}
    }
}
