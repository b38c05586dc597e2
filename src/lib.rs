//! YantraSim - Toy robot simulator on a bounded grid with route planning
//!
//! Simulates a robot on a rectangular table of cells, some of them blocked
//! ("potholes"), driven by a small line-oriented command language: PLACE,
//! MOVE, LEFT, RIGHT, REPORT and TRAVEL. TRAVEL runs a depth-first search
//! with backtracking to find any traversable route from the robot's cell
//! to a destination, avoiding potholes and the table edge.
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   simulator                         │  ← Session dispatch
//! └─────────────────────────────────────────────────────┘
//!                │                    │
//! ┌──────────────────────────┐ ┌─────────────────────────┐
//! │        command/          │ │       planning/         │  ← Parsing + execution,
//! │    (parser, engine)      │ │         (dfs)           │    route search
//! └──────────────────────────┘ └─────────────────────────┘
//!                │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │          (cell, heading, grid, pose)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The binary wraps [`Simulator`] in a line loop: interactive on stdin
//! until `exit`, or batch over a command file.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Route planning (depends on core)
// ============================================================================
pub mod planning;

// ============================================================================
// Layer 3: Command parsing and execution (depends on core)
// ============================================================================
pub mod command;

// ============================================================================
// Layer 4: Session dispatch (depends on all layers)
// ============================================================================
pub mod simulator;

// Ambient: configuration and errors
pub mod config;
pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core types
pub use crate::core::{Cell, Grid, Heading, Pose, RobotState};

// Planning
pub use crate::planning::find_path;

// Commands
pub use crate::command::{Command, CommandEngine, parse_line};

// Session
pub use crate::simulator::{Reply, Simulator};

// Configuration and errors
pub use crate::config::{Config, GridConfig};
pub use crate::error::{Result, SimError};
