//! Core types for the SIRS compartment model.
//!
//! This crate defines the model that the solver and renderer build on:
//!
//! - [`State`] — the population of each compartment at one instant
//! - [`Derivative`] — the time derivative of a [`State`]
//! - [`Parameters`] — the rate constants coupling the compartments
//!
//! A single integration step is the composition of [`Parameters::derivative`]
//! and [`State::step`]: the flow rates are evaluated in full from the current
//! state, then applied as one explicit Euler increment.

mod parameters;
mod state;

pub use parameters::Parameters;
pub use state::{Derivative, State};
