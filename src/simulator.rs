//! Top-level command dispatch and session state.

use crate::command::{Command, CommandEngine, parse_line};
use crate::core::{Cell, Grid, Heading, Pose, RobotState};
use crate::error::{Result, SimError};
use crate::planning::find_path;

/// Displayable outcome of one dispatched command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// State may have changed; nothing to print
    Silent,
    /// REPORT output: position and heading
    Report { x: i32, y: i32, heading: Heading },
    /// TRAVEL output: route from the current cell to the destination
    Path(Vec<Cell>),
}

/// Owns the session state and routes parsed commands.
///
/// One instance runs for the whole session. Every command line is
/// independent: a failed line leaves the robot state untouched and the
/// next line proceeds normally. Until the robot is placed, every command
/// except PLACE is rejected with `RobotNotPlaced`.
pub struct Simulator {
    engine: CommandEngine,
    state: RobotState,
}

impl Simulator {
    /// Create a simulator with an unplaced robot
    pub fn new(grid: Grid) -> Self {
        Self {
            engine: CommandEngine::new(grid),
            state: RobotState::unplaced(),
        }
    }

    /// Whether the robot has been placed yet
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.state.is_placed()
    }

    /// Current pose, if placed
    #[inline]
    pub fn pose(&self) -> Option<Pose> {
        self.state.pose()
    }

    /// Parse and execute one raw input line
    pub fn execute_line(&mut self, line: &str) -> Result<Reply> {
        let command = parse_line(line)?;
        self.execute(command)
    }

    /// Execute one parsed command
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        match command {
            Command::Place { x, y, heading } => {
                let pose = self.engine.place(x, y, heading)?;
                self.state.set_pose(pose);
                Ok(Reply::Silent)
            }
            Command::Move => {
                let pose = self.placed()?;
                self.state.set_pose(self.engine.step(pose));
                Ok(Reply::Silent)
            }
            Command::Left => {
                let pose = self.placed()?;
                self.state.set_pose(self.engine.turn_left(pose));
                Ok(Reply::Silent)
            }
            Command::Right => {
                let pose = self.placed()?;
                self.state.set_pose(self.engine.turn_right(pose));
                Ok(Reply::Silent)
            }
            Command::Report => {
                let (x, y, heading) = self.engine.report(&self.state)?;
                Ok(Reply::Report { x, y, heading })
            }
            Command::Travel { x, y } => {
                let pose = self.placed()?;
                let goal = Cell::new(x, y);
                // Uphold the search precondition: both endpoints must be
                // cells the robot may occupy.
                self.engine.check_cell(goal)?;
                let path = find_path(self.engine.grid(), pose.cell, goal)?;
                Ok(Reply::Path(path))
            }
        }
    }

    /// Current pose, or `RobotNotPlaced` for commands that need one
    fn placed(&self) -> Result<Pose> {
        self.state.pose().ok_or(SimError::RobotNotPlaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_simulator() -> Simulator {
        let potholes = [(1, 1), (2, 0), (0, 2), (1, 2), (3, 3)].map(Cell::from);
        Simulator::new(Grid::new(5, 5, potholes).unwrap())
    }

    #[test]
    fn test_commands_rejected_until_placed() {
        let mut sim = test_simulator();
        for line in ["MOVE", "LEFT", "RIGHT", "REPORT", "TRAVEL 1,0"] {
            let result = sim.execute_line(line);
            assert!(
                matches!(result, Err(SimError::RobotNotPlaced)),
                "{line} should be rejected before PLACE"
            );
            assert!(!sim.is_placed());
        }
    }

    #[test]
    fn test_place_then_report() {
        let mut sim = test_simulator();
        assert_eq!(sim.execute_line("PLACE 0,3,NORTH").unwrap(), Reply::Silent);
        assert_eq!(
            sim.execute_line("REPORT").unwrap(),
            Reply::Report { x: 0, y: 3, heading: Heading::North }
        );
    }

    #[test]
    fn test_failed_place_keeps_state() {
        let mut sim = test_simulator();
        sim.execute_line("PLACE 2,2,EAST").unwrap();
        assert!(sim.execute_line("PLACE 1,1,WEST").is_err());
        assert_eq!(
            sim.execute_line("REPORT").unwrap(),
            Reply::Report { x: 2, y: 2, heading: Heading::East }
        );
    }

    #[test]
    fn test_failed_place_leaves_unplaced() {
        let mut sim = test_simulator();
        assert!(sim.execute_line("PLACE 9,9,NORTH").is_err());
        assert!(!sim.is_placed());
    }

    #[test]
    fn test_move_sequence() {
        let mut sim = test_simulator();
        sim.execute_line("PLACE 0,0,EAST").unwrap();
        sim.execute_line("MOVE").unwrap();
        assert_eq!(
            sim.execute_line("REPORT").unwrap(),
            Reply::Report { x: 1, y: 0, heading: Heading::East }
        );
    }

    #[test]
    fn test_blocked_move_is_noop() {
        let mut sim = test_simulator();
        sim.execute_line("PLACE 3,2,NORTH").unwrap();
        sim.execute_line("MOVE").unwrap();
        assert_eq!(
            sim.execute_line("REPORT").unwrap(),
            Reply::Report { x: 3, y: 2, heading: Heading::North }
        );
    }

    #[test]
    fn test_turns_keep_position() {
        let mut sim = test_simulator();
        sim.execute_line("PLACE 2,2,NORTH").unwrap();
        sim.execute_line("LEFT").unwrap();
        assert_eq!(
            sim.execute_line("REPORT").unwrap(),
            Reply::Report { x: 2, y: 2, heading: Heading::West }
        );
        sim.execute_line("RIGHT").unwrap();
        sim.execute_line("RIGHT").unwrap();
        assert_eq!(
            sim.execute_line("REPORT").unwrap(),
            Reply::Report { x: 2, y: 2, heading: Heading::East }
        );
    }

    #[test]
    fn test_travel_returns_route() {
        let mut sim = test_simulator();
        sim.execute_line("PLACE 0,0,NORTH").unwrap();
        assert_eq!(
            sim.execute_line("TRAVEL 1,0").unwrap(),
            Reply::Path(vec![Cell::new(0, 0), Cell::new(1, 0)])
        );
    }

    #[test]
    fn test_travel_to_current_cell() {
        let mut sim = test_simulator();
        sim.execute_line("PLACE 2,2,SOUTH").unwrap();
        assert_eq!(sim.execute_line("TRAVEL 2,2").unwrap(), Reply::Path(vec![Cell::new(2, 2)]));
    }

    #[test]
    fn test_travel_rejects_bad_destination() {
        let mut sim = test_simulator();
        sim.execute_line("PLACE 0,0,NORTH").unwrap();
        assert!(matches!(
            sim.execute_line("TRAVEL 1,1"),
            Err(SimError::IllegalCoordinate { x: 1, y: 1, .. })
        ));
        assert!(matches!(
            sim.execute_line("TRAVEL 5,5"),
            Err(SimError::IllegalCoordinate { .. })
        ));
    }

    #[test]
    fn test_travel_unreachable_destination() {
        let mut sim = test_simulator();
        sim.execute_line("PLACE 0,0,NORTH").unwrap();
        assert!(matches!(sim.execute_line("TRAVEL 4,4"), Err(SimError::NoPath { .. })));
    }

    #[test]
    fn test_travel_does_not_move_robot() {
        let mut sim = test_simulator();
        sim.execute_line("PLACE 3,0,NORTH").unwrap();
        sim.execute_line("TRAVEL 4,4").unwrap();
        assert_eq!(
            sim.execute_line("REPORT").unwrap(),
            Reply::Report { x: 3, y: 0, heading: Heading::North }
        );
    }

    #[test]
    fn test_session_recovers_after_errors() {
        let mut sim = test_simulator();
        assert!(sim.execute_line("JUMP").is_err());
        assert!(sim.execute_line("MOVE").is_err());
        sim.execute_line("PLACE 4,0,WEST").unwrap();
        assert!(sim.execute_line("PLACE 1,oops,WEST").is_err());
        assert_eq!(
            sim.execute_line("REPORT").unwrap(),
            Reply::Report { x: 4, y: 0, heading: Heading::West }
        );
    }
}
