/// Event emitted by the trajectory generator for each state.
///
/// Step 0 is the initial condition.
/// Steps 1..N are emitted after each map evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// The state at this step.
    pub state: f64,
}
