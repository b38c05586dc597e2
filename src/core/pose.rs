//! Robot pose and placement state.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Heading};

/// A placed robot's cell and heading
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Cell the robot stands on
    pub cell: Cell,
    /// Direction the robot faces
    pub heading: Heading,
}

impl Pose {
    /// Create a new pose
    #[inline]
    pub fn new(cell: Cell, heading: Heading) -> Self {
        Self { cell, heading }
    }
}

/// Placement state of the robot.
///
/// The robot either has a full pose (cell and heading together) or none
/// at all, so position and heading can never be set independently. A new
/// state starts unplaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RobotState {
    pose: Option<Pose>,
}

impl RobotState {
    /// State with no robot on the table
    pub fn unplaced() -> Self {
        Self::default()
    }

    /// Whether the robot has been placed
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.pose.is_some()
    }

    /// Current pose, if placed
    #[inline]
    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    /// Place or re-place the robot
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = Some(pose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unplaced() {
        let state = RobotState::unplaced();
        assert!(!state.is_placed());
        assert_eq!(state.pose(), None);
    }

    #[test]
    fn test_set_pose_places() {
        let mut state = RobotState::unplaced();
        let pose = Pose::new(Cell::new(2, 3), Heading::East);
        state.set_pose(pose);
        assert!(state.is_placed());
        assert_eq!(state.pose(), Some(pose));
    }

    #[test]
    fn test_replace_overwrites() {
        let mut state = RobotState::unplaced();
        state.set_pose(Pose::new(Cell::new(0, 0), Heading::North));
        state.set_pose(Pose::new(Cell::new(4, 4), Heading::West));
        assert_eq!(state.pose(), Some(Pose::new(Cell::new(4, 4), Heading::West)));
    }
}
