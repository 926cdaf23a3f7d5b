/// Errors raised while locating the stimulus that captures the next beat.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error(
        "no stimulus within {max_multiplier} periods of {period} ms captures an APD of {apd} ms \
         (refractory offset {theta} ms)"
    )]
    Exhausted {
        apd: f64,
        theta: f64,
        period: f64,
        max_multiplier: u32,
    },
}
