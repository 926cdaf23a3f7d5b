use std::error::Error as StdError;

/// Errors that can occur while generating a trajectory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("map error at step {step}: {source}")]
    Map {
        /// The step whose state could not be produced.
        step: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn map<E: StdError + Send + Sync + 'static>(step: usize, err: E) -> Self {
        Self::Map {
            step,
            source: Box::new(err),
        }
    }

    /// Returns the step at which the trajectory failed.
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::Map { step, .. } => *step,
        }
    }
}
