/// A one-dimensional discrete map: `x_{n+1} = f(x_n)`.
///
/// Maps must be deterministic, always producing the same next state for a
/// given state. Any parameters a map depends on are held by the implementing
/// type and are fixed for the lifetime of a value, so iterating a map never
/// observes hidden state.
///
/// Maps that cannot fail use [`std::convert::Infallible`] as their error.
pub trait Map {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the map at `state`, returning the next state.
    ///
    /// Non-finite states are not an error; implementations should let them
    /// propagate so that callers can decide how to present them.
    ///
    /// # Errors
    ///
    /// Each map defines its own `Error` type to represent domain-specific failures.
    fn evaluate(&self, state: f64) -> Result<f64, Self::Error>;
}

impl<M: Map + ?Sized> Map for &M {
    type Error = M::Error;

    fn evaluate(&self, state: f64) -> Result<f64, Self::Error> {
        (**self).evaluate(state)
    }
}
