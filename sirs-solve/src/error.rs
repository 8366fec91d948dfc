/// Errors reported by [`validate`](crate::validate).
///
/// The solver itself never raises these; they exist for callers that want to
/// reject unusable configurations up front instead of receiving a degenerate
/// (empty) trajectory.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),

    #[error("simulation duration must be positive and finite, got {0}")]
    InvalidDuration(f64),

    #[error("initial state contains a non-finite value: {0}")]
    NonFiniteState(f64),

    #[error("parameters contain a non-finite value: {0}")]
    NonFiniteParameter(f64),
}
