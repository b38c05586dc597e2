//! Error types for YantraSim

use thiserror::Error;

use crate::core::Cell;

/// Result type alias
pub type Result<T> = std::result::Result<T, SimError>;

/// YantraSim error type
#[derive(Error, Debug)]
pub enum SimError {
    /// Command arguments that do not parse
    #[error("Invalid command format: {0}")]
    InvalidFormat(String),

    /// Coordinate outside the grid or on a pothole
    #[error("Illegal coordinate ({x}, {y}): {reason}")]
    IllegalCoordinate {
        /// X coordinate of the rejected cell
        x: i32,
        /// Y coordinate of the rejected cell
        y: i32,
        /// Which rule rejected it
        reason: &'static str,
    },

    /// Action requires the robot to be placed first
    #[error("Robot not found on table")]
    RobotNotPlaced,

    /// No traversable route between two cells
    #[error("No path from {from} to {to}")]
    NoPath {
        /// Start of the failed search
        from: Cell,
        /// Unreachable destination
        to: Cell,
    },

    /// Unknown command keyword
    #[error("{0}: command not found")]
    CommandNotFound(String),

    /// Reserved command keyword without an implementation
    #[error("{0}: command not implemented yet")]
    CommandNotImplemented(String),

    /// Non-positive grid dimensions
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidGrid {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<basic_toml::Error> for SimError {
    fn from(e: basic_toml::Error) -> Self {
        SimError::Config(e.to_string())
    }
}
