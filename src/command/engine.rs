//! Single-command execution against the grid.

use crate::core::{Cell, Grid, Heading, Pose, RobotState};
use crate::error::{Result, SimError};

/// Executes individual robot commands against a fixed grid.
///
/// The engine is stateless: callers hand in the current pose and keep
/// whatever comes back. Placement gating for unplaced robots lives in the
/// dispatcher.
#[derive(Clone, Debug)]
pub struct CommandEngine {
    grid: Grid,
}

impl CommandEngine {
    /// Create an engine over the given grid
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Grid the engine executes against
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Validate a placement and produce the resulting pose.
    ///
    /// Fails with `IllegalCoordinate` when the target is outside the grid
    /// or on a pothole; the two cases get distinct messages.
    pub fn place(&self, x: i32, y: i32, heading: Heading) -> Result<Pose> {
        let cell = Cell::new(x, y);
        self.check_cell(cell)?;
        log::info!("Robot placed at {} facing {}", cell, heading.as_str());
        Ok(Pose::new(cell, heading))
    }

    /// One step forward in the pose's heading.
    ///
    /// Stepping off the grid or into a pothole is a silent no-op: the
    /// robot cannot fall off the table or drive into a hole.
    pub fn step(&self, pose: Pose) -> Pose {
        let target = pose.cell + pose.heading.displacement();
        if self.grid.contains(target) {
            Pose::new(target, pose.heading)
        } else {
            log::debug!("Ignoring step from {} facing {}", pose.cell, pose.heading.as_str());
            pose
        }
    }

    /// Rotate 90 degrees counter-clockwise
    pub fn turn_left(&self, pose: Pose) -> Pose {
        Pose::new(pose.cell, pose.heading.turn_left())
    }

    /// Rotate 90 degrees clockwise
    pub fn turn_right(&self, pose: Pose) -> Pose {
        Pose::new(pose.cell, pose.heading.turn_right())
    }

    /// Current position and heading, or `RobotNotPlaced`
    pub fn report(&self, state: &RobotState) -> Result<(i32, i32, Heading)> {
        match state.pose() {
            Some(pose) => Ok((pose.cell.x, pose.cell.y, pose.heading)),
            None => Err(SimError::RobotNotPlaced),
        }
    }

    /// Reject cells the robot may not occupy
    pub(crate) fn check_cell(&self, cell: Cell) -> Result<()> {
        if !self.grid.in_bounds(cell) {
            return Err(SimError::IllegalCoordinate {
                x: cell.x,
                y: cell.y,
                reason: "outside the grid",
            });
        }
        if self.grid.is_pothole(cell) {
            return Err(SimError::IllegalCoordinate {
                x: cell.x,
                y: cell.y,
                reason: "cell is a pothole",
            });
        }
        Ok(())
    }
}
