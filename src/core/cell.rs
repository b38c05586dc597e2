//! Cell coordinate type for the simulation grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Grid cell (integer coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl Cell {
    /// Create a new cell coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [Cell; 4] {
        [
            Cell::new(self.x, self.y + 1), // North
            Cell::new(self.x + 1, self.y), // East
            Cell::new(self.x, self.y - 1), // South
            Cell::new(self.x - 1, self.y), // West
        ]
    }
}

impl Add<(i32, i32)> for Cell {
    type Output = Self;

    #[inline]
    fn add(self, (dx, dy): (i32, i32)) -> Self {
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
