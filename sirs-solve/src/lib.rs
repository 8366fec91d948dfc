//! Fixed-step forward Euler driver for the SIRS model.
//!
//! This crate advances a [`sirs_core::State`] across a uniform time grid
//! using explicit Euler:
//!
//! ```text
//! state_{k+1} = state_k + derivative_k * dt
//! ```
//!
//! # Example
//!
//! ```
//! use sirs_core::{Parameters, State};
//! use sirs_solve::simulate;
//!
//! let initial = State::new(990.0, 10.0, 0.0);
//! let parameters = Parameters::new(0.3, 0.1, 0.05);
//!
//! let trajectory = simulate(initial, &parameters, 200.0, 0.1);
//!
//! assert_eq!(trajectory.len(), 2000);
//! assert_eq!(trajectory.susceptible[0], 990.0);
//! ```
//!
//! The driver is deliberately first-order and fixed-step: it trades accuracy
//! and stability at large `dt` for an exactly reproducible discretization.
//! Inputs are trusted; see [`validate`] for the opt-in checking used by the
//! command-line front end.

mod error;
mod euler;
mod grid;
mod trajectory;

pub use error::Error;
pub use euler::{simulate, validate};
pub use grid::time_grid;
pub use trajectory::Trajectory;
