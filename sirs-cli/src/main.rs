//! Command-line front end for the SIRS epidemic simulator.
//!
//! Runs a forward Euler simulation of the SIRS model and opens a window with
//! the three compartment trajectories. Every model constant can be overridden
//! from the command line; the defaults reproduce the demonstration outbreak:
//!
//! ```text
//! sirs
//! sirs --beta 0.5 --dt 0.05
//! sirs --i0 0 --r0 0       # no seed, nothing happens
//! ```

use std::error::Error;

use clap::Parser;
use sirs_core::{Parameters, State};
use sirs_plot::PlotApp;
use sirs_solve::simulate;

#[derive(Parser, Debug)]
#[command(name = "sirs")]
#[command(about = "Simulate SIRS epidemic dynamics with waning immunity", long_about = None)]
struct Args {
    /// Initial susceptible population
    #[arg(long, default_value_t = 990.0)]
    s0: f64,

    /// Initial infectious population
    #[arg(long, default_value_t = 10.0)]
    i0: f64,

    /// Initial recovered population
    #[arg(long, default_value_t = 0.0)]
    r0: f64,

    /// Transmission rate
    #[arg(long, default_value_t = 0.3)]
    beta: f64,

    /// Recovery rate
    #[arg(long, default_value_t = 0.1)]
    gamma: f64,

    /// Immunity waning rate
    #[arg(long, default_value_t = 0.05)]
    delta: f64,

    /// Total simulated duration
    #[arg(long, default_value_t = 200.0)]
    duration: f64,

    /// Integration step size
    #[arg(long, default_value_t = 0.1)]
    dt: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let initial = State::new(args.s0, args.i0, args.r0);
    let parameters = Parameters::new(args.beta, args.gamma, args.delta);

    sirs_solve::validate(&initial, &parameters, args.duration, args.dt)?;

    let trajectory = simulate(initial, &parameters, args.duration, args.dt);

    PlotApp::new()
        .x_label("Time")
        .y_label("Population")
        .add_series("Susceptible", &trajectory.times, &trajectory.susceptible)
        .add_series("Infectious", &trajectory.times, &trajectory.infectious)
        .add_series("Recovered", &trajectory.times, &trajectory.recovered)
        .run("SIR Model Dynamics with Time-Limited Immunity")?;

    Ok(())
}
