/// The population of each compartment at one instant.
///
/// Values are plain counts (or fractions of a normalized population). Nothing
/// constrains them to be non-negative: the model equations are defined for any
/// real inputs, and the solver propagates whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub susceptible: f64,
    pub infectious: f64,
    pub recovered: f64,
}

/// The time derivative of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative {
    pub d_susceptible: f64,
    pub d_infectious: f64,
    pub d_recovered: f64,
}

impl State {
    /// Creates a state from compartment populations.
    #[must_use]
    pub const fn new(susceptible: f64, infectious: f64, recovered: f64) -> Self {
        Self {
            susceptible,
            infectious,
            recovered,
        }
    }

    /// The total population across all compartments.
    ///
    /// The analytic flow terms sum to zero, so this is conserved in the limit
    /// `dt -> 0`; at finite `dt` the discrete scheme lets it drift slightly.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.susceptible + self.infectious + self.recovered
    }

    /// Advances the state by one explicit Euler increment:
    ///
    /// ```text
    /// next = self + derivative * dt
    /// ```
    ///
    /// The derivative is applied as given and never recomputed here, so every
    /// component of the update reads the same pre-step state.
    #[must_use]
    pub fn step(&self, derivative: Derivative, dt: f64) -> Self {
        Self {
            susceptible: self.susceptible + derivative.d_susceptible * dt,
            infectious: self.infectious + derivative.d_infectious * dt,
            recovered: self.recovered + derivative.d_recovered * dt,
        }
    }
}
