//! Core types for the simulator.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`Cell`]: Integer grid coordinate
//! - [`Heading`]: Compass direction with turn and displacement semantics
//! - [`Grid`]: Bounded table with blocked cells
//! - [`Pose`] and [`RobotState`]: Robot placement

mod cell;
mod grid;
mod heading;
mod pose;

pub use cell::Cell;
pub use grid::Grid;
pub use heading::Heading;
pub use pose::{Pose, RobotState};
