use sirs_core::State;

/// The fully materialized result of one simulation run.
///
/// All four sequences have identical length and are aligned index-for-index:
/// `susceptible[k]`, `infectious[k]`, and `recovered[k]` are the compartment
/// populations at `times[k]`. Index 0 holds the initial condition as
/// supplied, not a computed step.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub susceptible: Vec<f64>,
    pub infectious: Vec<f64>,
    pub recovered: Vec<f64>,
}

impl Trajectory {
    /// Creates an empty trajectory over the given time grid, with capacity
    /// reserved for one record per grid point.
    pub(crate) fn with_times(times: Vec<f64>) -> Self {
        let len = times.len();
        Self {
            times,
            susceptible: Vec::with_capacity(len),
            infectious: Vec::with_capacity(len),
            recovered: Vec::with_capacity(len),
        }
    }

    /// Appends one state to the three compartment series.
    pub(crate) fn record(&mut self, state: &State) {
        self.susceptible.push(state.susceptible);
        self.infectious.push(state.infectious);
        self.recovered.push(state.recovered);
    }

    /// The number of grid points in the trajectory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the trajectory holds no grid points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
