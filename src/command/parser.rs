//! Command protocol parsing.
//!
//! One raw text line becomes one typed [`Command`]; everything malformed is
//! rejected here so later stages only see well-formed payloads.

use crate::core::Heading;
use crate::error::{Result, SimError};

/// Reserved command keywords (case-sensitive)
const KEYWORDS: [&str; 6] = ["PLACE", "LEFT", "RIGHT", "MOVE", "REPORT", "TRAVEL"];

/// A parsed command with its typed payload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place or re-place the robot
    Place { x: i32, y: i32, heading: Heading },
    /// Step one cell forward
    Move,
    /// Rotate 90 degrees counter-clockwise
    Left,
    /// Rotate 90 degrees clockwise
    Right,
    /// Report the current pose
    Report,
    /// Compute a route from the current cell to a destination
    Travel { x: i32, y: i32 },
}

/// Parse one raw input line into a command.
///
/// The keyword runs up to the first space; the rest is the argument
/// string, from which all whitespace is removed, so `PLACE 1, 2 , NORTH`
/// is accepted. Keywords outside the reserved table fail with
/// `CommandNotFound`; a reserved keyword without a mapping fails with
/// `CommandNotImplemented`. MOVE, LEFT, RIGHT and REPORT ignore trailing
/// argument text.
pub fn parse_line(line: &str) -> Result<Command> {
    let line = line.trim();
    let (keyword, args) = match line.split_once(' ') {
        Some((keyword, rest)) => (keyword, rest.split_whitespace().collect::<String>()),
        None => (line, String::new()),
    };

    if !KEYWORDS.contains(&keyword) {
        return Err(SimError::CommandNotFound(keyword.to_string()));
    }

    match keyword {
        "PLACE" => parse_place(&args),
        "MOVE" => Ok(Command::Move),
        "LEFT" => Ok(Command::Left),
        "RIGHT" => Ok(Command::Right),
        "REPORT" => Ok(Command::Report),
        "TRAVEL" => parse_travel(&args),
        other => Err(SimError::CommandNotImplemented(other.to_string())),
    }
}

/// Parse `x,y,HEADING` into a Place command
fn parse_place(args: &str) -> Result<Command> {
    let fields: Vec<&str> = args.split(',').collect();
    if fields.len() != 3 {
        return Err(SimError::InvalidFormat(format!(
            "PLACE expects X,Y,HEADING, got {args:?}"
        )));
    }
    let x = parse_coordinate(fields[0])?;
    let y = parse_coordinate(fields[1])?;
    let heading = Heading::parse(fields[2])
        .ok_or_else(|| SimError::InvalidFormat(format!("Unknown heading {:?}", fields[2])))?;
    Ok(Command::Place { x, y, heading })
}

/// Parse `x,y` into a Travel command
fn parse_travel(args: &str) -> Result<Command> {
    let fields: Vec<&str> = args.split(',').collect();
    if fields.len() != 2 {
        return Err(SimError::InvalidFormat(format!("TRAVEL expects X,Y, got {args:?}")));
    }
    Ok(Command::Travel {
        x: parse_coordinate(fields[0])?,
        y: parse_coordinate(fields[1])?,
    })
}

fn parse_coordinate(field: &str) -> Result<i32> {
    field
        .parse()
        .map_err(|_| SimError::InvalidFormat(format!("{field:?} is not a coordinate")))
}
