//! Closed-form projectile motion under constant gravity.
//!
//! [`core::ballistics`] turns launch parameters into a sampled
//! [`Trajectory`]; [`plot`] renders one with `plotters`.

pub mod core;
pub mod error;
pub mod plot;

pub use crate::core::ballistics::{
    FlightSummary, SimulationParams, Trajectory, projectile_motion,
};
pub use crate::error::{PlotError, TrajectoryError};
