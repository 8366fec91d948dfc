use crate::{Derivative, State};

/// Rate constants of the SIRS model, fixed for the duration of one run.
///
/// The governing equations are:
///
/// ```text
/// dS/dt = -beta*S*I + delta*R
/// dI/dt =  beta*S*I - gamma*I
/// dR/dt =  gamma*I  - delta*R
/// ```
///
/// The `delta` term returns recovered individuals to the susceptible pool,
/// which is what distinguishes this model from the basic SIR model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Transmission rate (beta).
    pub beta: f64,
    /// Recovery rate (gamma).
    pub gamma: f64,
    /// Immunity waning rate (delta).
    pub delta: f64,
}

impl Parameters {
    /// Creates a parameter set from the three rate constants.
    #[must_use]
    pub const fn new(beta: f64, gamma: f64, delta: f64) -> Self {
        Self { beta, gamma, delta }
    }

    /// Computes the compartment flow rates at the given state.
    ///
    /// All three derivatives are evaluated from the state as supplied; no
    /// term ever observes an already-updated compartment. Inputs are not
    /// validated — negative populations or rates yield the mathematically
    /// defined result.
    #[must_use]
    pub fn derivative(&self, state: &State) -> Derivative {
        let State {
            susceptible,
            infectious,
            recovered,
        } = *state;

        Derivative {
            d_susceptible: -self.beta * susceptible * infectious + self.delta * recovered,
            d_infectious: self.beta * susceptible * infectious - self.gamma * infectious,
            d_recovered: self.gamma * infectious - self.delta * recovered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn flow_rates_at_outbreak_start() {
        let parameters = Parameters::new(0.3, 0.1, 0.05);
        let state = State::new(990.0, 10.0, 0.0);

        let derivative = parameters.derivative(&state);

        assert_relative_eq!(derivative.d_susceptible, -2970.0, epsilon = 1e-9);
        assert_relative_eq!(derivative.d_infectious, 2969.0, epsilon = 1e-9);
        assert_relative_eq!(derivative.d_recovered, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn flow_rates_sum_to_zero() {
        let parameters = Parameters::new(0.3, 0.1, 0.05);
        let state = State::new(400.0, 350.0, 250.0);

        let derivative = parameters.derivative(&state);
        let sum = derivative.d_susceptible + derivative.d_infectious + derivative.d_recovered;

        assert_relative_eq!(sum, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn single_step_matches_hand_computation() {
        let parameters = Parameters::new(0.3, 0.1, 0.05);
        let state = State::new(990.0, 10.0, 0.0);

        let next = state.step(parameters.derivative(&state), 0.1);

        assert_relative_eq!(next.susceptible, 693.0, epsilon = 1e-9);
        assert_relative_eq!(next.infectious, 306.9, epsilon = 1e-9);
        assert_relative_eq!(next.recovered, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn derivatives_read_only_the_pre_step_state() {
        // With beta = 1 and no recovery or waning, the infection inflow must
        // use the original susceptible count, not one already drained by the
        // susceptible update within the same step.
        let parameters = Parameters::new(1.0, 0.0, 0.0);
        let state = State::new(1.0, 1.0, 1.0);

        let next = state.step(parameters.derivative(&state), 1.0);

        assert_relative_eq!(next.susceptible, 0.0);
        assert_relative_eq!(next.infectious, 2.0);
        assert_relative_eq!(next.recovered, 1.0);
    }

    #[test]
    fn no_infection_without_infectious_seed() {
        let parameters = Parameters::new(0.3, 0.1, 0.05);
        let state = State::new(990.0, 0.0, 0.0);

        let derivative = parameters.derivative(&state);

        assert_eq!(derivative.d_susceptible, 0.0);
        assert_eq!(derivative.d_infectious, 0.0);
        assert_eq!(derivative.d_recovered, 0.0);
    }
}
