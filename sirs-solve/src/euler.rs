use sirs_core::{Parameters, State};

use crate::{Error, Trajectory, time_grid};

/// Integrates the SIRS model across a uniform time grid using forward Euler.
///
/// # Algorithm
///
/// 1. Build the time grid: `t_k = k * dt` while `t_k < t_end`.
/// 2. Record the initial state at grid index 0.
/// 3. For each later grid point, evaluate the derivative at the most recently
///    recorded state and step it forward by `dt`.
/// 4. Return the grid alongside the three compartment series.
///
/// Iteration `k` depends on the result of iteration `k - 1`, so the loop is
/// strictly sequential. There is no early-termination condition: the model
/// runs to the end of the grid even if the infection dies out.
///
/// Inputs are trusted. Degenerate inputs (`dt <= 0`, `t_end <= 0`, or NaN)
/// produce an empty trajectory; use [`validate`] first to reject them with a
/// typed error instead.
#[must_use]
pub fn simulate(initial: State, parameters: &Parameters, t_end: f64, dt: f64) -> Trajectory {
    let mut trajectory = Trajectory::with_times(time_grid(t_end, dt));
    let steps = trajectory.len();

    if steps == 0 {
        return trajectory;
    }

    let mut current = initial;
    trajectory.record(&current);

    for _ in 1..steps {
        current = current.step(parameters.derivative(&current), dt);
        trajectory.record(&current);
    }

    trajectory
}

/// Checks simulation inputs before a run.
///
/// [`simulate`] accepts anything and answers degenerate inputs with an empty
/// trajectory; this is the stricter entry for front ends that should fail
/// loudly instead. Validation never alters the numerical result: inputs that
/// pass produce exactly the trajectory `simulate` would have produced anyway.
///
/// Negative rate constants and negative populations are accepted — the model
/// equations are defined for them, and the solver propagates them as given.
///
/// # Errors
///
/// Returns [`Error`] if `dt` or `t_end` is non-positive or non-finite, or if
/// any state or parameter value is non-finite.
pub fn validate(
    initial: &State,
    parameters: &Parameters,
    t_end: f64,
    dt: f64,
) -> Result<(), Error> {
    if !(dt > 0.0 && dt.is_finite()) {
        return Err(Error::InvalidStepSize(dt));
    }
    if !(t_end > 0.0 && t_end.is_finite()) {
        return Err(Error::InvalidDuration(t_end));
    }

    for value in [initial.susceptible, initial.infectious, initial.recovered] {
        if !value.is_finite() {
            return Err(Error::NonFiniteState(value));
        }
    }
    for value in [parameters.beta, parameters.gamma, parameters.delta] {
        if !value.is_finite() {
            return Err(Error::NonFiniteParameter(value));
        }
    }

    Ok(())
}
