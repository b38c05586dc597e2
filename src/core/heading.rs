//! Compass heading of the robot.

use serde::{Deserialize, Serialize};

/// Compass heading, cyclically ordered NORTH, EAST, SOUTH, WEST.
///
/// Turning right advances one step through the cycle; turning left goes
/// one step back. The coordinate convention follows a graph: north is the
/// direction of increasing y, east of increasing x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in cyclic order
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Heading after a 90 degree counter-clockwise turn
    #[inline]
    pub fn turn_left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Heading after a 90 degree clockwise turn
    #[inline]
    pub fn turn_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit displacement (dx, dy) for one step in this heading
    #[inline]
    pub fn displacement(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Protocol name of this heading
    pub fn as_str(&self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }

    /// Parse a protocol name (case-sensitive)
    pub fn parse(token: &str) -> Option<Heading> {
        match token {
            "NORTH" => Some(Heading::North),
            "EAST" => Some(Heading::East),
            "SOUTH" => Some(Heading::South),
            "WEST" => Some(Heading::West),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_cycle() {
        let mut heading = Heading::North;
        let expected = [Heading::West, Heading::South, Heading::East, Heading::North];
        for want in expected {
            heading = heading.turn_left();
            assert_eq!(heading, want);
        }
    }

    #[test]
    fn test_right_cycle() {
        let mut heading = Heading::North;
        let expected = [Heading::East, Heading::South, Heading::West, Heading::North];
        for want in expected {
            heading = heading.turn_right();
            assert_eq!(heading, want);
        }
    }

    #[test]
    fn test_four_turns_restore() {
        for start in Heading::ALL {
            let mut h = start;
            for _ in 0..4 {
                h = h.turn_left();
            }
            assert_eq!(h, start);
            for _ in 0..4 {
                h = h.turn_right();
            }
            assert_eq!(h, start);
        }
    }

    #[test]
    fn test_displacement() {
        assert_eq!(Heading::North.displacement(), (0, 1));
        assert_eq!(Heading::East.displacement(), (1, 0));
        assert_eq!(Heading::South.displacement(), (0, -1));
        assert_eq!(Heading::West.displacement(), (-1, 0));
    }

    #[test]
    fn test_parse_round_trip() {
        for heading in Heading::ALL {
            assert_eq!(Heading::parse(heading.as_str()), Some(heading));
        }
    }

    #[test]
    fn test_parse_rejects_other_tokens() {
        assert_eq!(Heading::parse("north"), None);
        assert_eq!(Heading::parse("NORTHEAST"), None);
        assert_eq!(Heading::parse(""), None);
    }
}
