//! Depth-first route search over the simulation grid.
//!
//! Any valid route is acceptable, not necessarily the shortest: the search
//! returns the first path found in the fixed N, E, S, W neighbor order.

use std::collections::HashSet;

use crate::core::{Cell, Grid};
use crate::error::{Result, SimError};

/// Find a traversable route from `start` to `goal`.
///
/// Both endpoints must be in bounds and free of potholes (the caller
/// validates this before searching). The returned path begins at `start`,
/// ends at `goal`, visits no cell twice, and every step moves to a
/// cardinal neighbor the grid can contain.
///
/// Fails with `NoPath` when the goal is unreachable.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
    if start == goal {
        log::info!("Already at destination {}", goal);
        return Ok(vec![start]);
    }

    // Both the visited set and the path stack live for exactly one
    // search; no state survives between invocations.
    let mut visited = HashSet::new();
    let mut path = Vec::new();
    if search(grid, start, goal, &mut visited, &mut path) {
        log::debug!("Found {}-cell route from {} to {}", path.len(), start, goal);
        Ok(path)
    } else {
        Err(SimError::NoPath { from: start, to: goal })
    }
}

/// Recursive descent with backtracking.
///
/// Pushes `current`, tries each unvisited neighbor in N, E, S, W order,
/// and pops on dead end. Returns whether the goal was reached; on success
/// `path` holds the full route, on failure it is restored to its state at
/// entry. `visited` grows monotonically so no cell is entered twice.
fn search(
    grid: &Grid,
    current: Cell,
    goal: Cell,
    visited: &mut HashSet<Cell>,
    path: &mut Vec<Cell>,
) -> bool {
    visited.insert(current);
    path.push(current);

    if current == goal {
        return true;
    }

    for next in grid.neighbors(current) {
        if visited.contains(&next) {
            continue;
        }
        if search(grid, next, goal, visited, path) {
            return true;
        }
    }

    path.pop();
    false
}
