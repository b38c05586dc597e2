//! Bounded simulation grid with blocked cells.

use std::collections::HashSet;

use crate::core::Cell;
use crate::error::{Result, SimError};

/// Bounded rectangle of cells with a fixed set of potholes.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is the lower left corner
/// - Positive X is east, positive Y is north
/// - Valid coordinates satisfy `0 <= x < width` and `0 <= y < height`
///
/// Constructed once at startup and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Grid width in cells
    width: i32,
    /// Grid height in cells
    height: i32,
    /// Cells the robot may never occupy
    potholes: HashSet<Cell>,
}

impl Grid {
    /// Create a grid with the given dimensions and blocked cells.
    ///
    /// Fails with `InvalidGrid` if either dimension is not positive.
    /// Pothole entries outside the bounds are kept but unreachable.
    pub fn new(width: i32, height: i32, potholes: impl IntoIterator<Item = Cell>) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(SimError::InvalidGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            potholes: potholes.into_iter().collect(),
        })
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of blocked cells
    #[inline]
    pub fn pothole_count(&self) -> usize {
        self.potholes.len()
    }

    /// Whether the cell lies within the grid bounds
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Whether the cell is a pothole
    #[inline]
    pub fn is_pothole(&self, cell: Cell) -> bool {
        self.potholes.contains(&cell)
    }

    /// Whether the robot may occupy the cell (in bounds and not a pothole)
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_pothole(cell)
    }

    /// Occupiable cells one step away, in fixed N, E, S, W order.
    ///
    /// The order is part of the contract: route search iterates neighbors
    /// in this order, which keeps found routes reproducible.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        cell.neighbors_4()
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }
}
