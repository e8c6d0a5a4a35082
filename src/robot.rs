//! Robot state and operations.

use crate::error::RobotError;
use crate::table::{self, Heading, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of comma-separated arguments `PLACE` takes: `X,Y,F`.
pub const PLACE_ARG_COUNT: usize = 3;

/// Whether the robot is on the table, and where.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotState {
    /// No PLACE has succeeded yet. Every other command is refused.
    #[default]
    Unplaced,
    /// On the table at `position`, facing `heading`.
    Placed { position: Position, heading: Heading },
}

/// Snapshot produced by a successful `REPORT`.
///
/// Displays as `Output: X,Y,F`, which is the only text the robot ever emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub position: Position,
    pub heading: Heading,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Output: {},{},{}",
            self.position.x, self.position.y, self.heading
        )
    }
}

/// Operations that can be performed by the robot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot on the table. Carries the raw `X,Y,F` tokens.
    Place(Vec<String>),
    /// Step one square forward.
    Move,
    /// Quarter turn counter-clockwise.
    Left,
    /// Quarter turn clockwise.
    Right,
    /// Emit the current position and heading.
    Report,
    /// No-op: unknown keyword or blank line.
    Ignore,
}

/// The toy robot.
///
/// Starts off the table. Commands either succeed and update the state in a
/// single assignment, or fail and leave it untouched.
#[derive(Clone, Debug, Default)]
pub struct Robot {
    state: RobotState,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, RobotState::Placed { .. })
    }

    pub fn position(&self) -> Option<Position> {
        match self.state {
            RobotState::Placed { position, .. } => Some(position),
            RobotState::Unplaced => None,
        }
    }

    pub fn heading(&self) -> Option<Heading> {
        match self.state {
            RobotState::Placed { heading, .. } => Some(heading),
            RobotState::Unplaced => None,
        }
    }

    /// Places the robot from raw `PLACE` arguments.
    ///
    /// Checks, in order: exactly [`PLACE_ARG_COUNT`] tokens, integer
    /// coordinates, coordinates on the table, and a known heading name
    /// (case-sensitive). The first failing check is returned.
    pub fn place(&mut self, args: &[&str]) -> Result<(), RobotError> {
        let [x_raw, y_raw, dir_raw] = args else {
            return Err(RobotError::ArgumentCount {
                expected: PLACE_ARG_COUNT,
                found: args.len(),
            });
        };

        let x = parse_coordinate(x_raw)?;
        let y = parse_coordinate(y_raw)?;
        let position = on_table(Position::new(x, y))?;

        let heading = dir_raw
            .parse::<Heading>()
            .map_err(|e| RobotError::UnknownHeading(e.0))?;

        self.state = RobotState::Placed { position, heading };
        Ok(())
    }

    /// Places the robot at an already-parsed position and heading.
    pub fn place_at(&mut self, position: Position, heading: Heading) -> Result<(), RobotError> {
        let position = on_table(position)?;
        self.state = RobotState::Placed { position, heading };
        Ok(())
    }

    /// Steps one square in the current heading (`MOVE`).
    ///
    /// A step that would leave the table is refused and the robot stays put.
    pub fn move_forward(&mut self) -> Result<(), RobotError> {
        let RobotState::Placed { position, heading } = self.state else {
            return Err(RobotError::NotPlaced);
        };

        let target = position + heading.delta();
        if !table::contains(target) {
            return Err(RobotError::Blocked {
                x: target.x,
                y: target.y,
            });
        }

        self.state = RobotState::Placed {
            position: target,
            heading,
        };
        Ok(())
    }

    pub fn turn_left(&mut self) -> Result<(), RobotError> {
        self.rotate(Heading::left)
    }

    pub fn turn_right(&mut self) -> Result<(), RobotError> {
        self.rotate(Heading::right)
    }

    fn rotate(&mut self, turn: fn(Heading) -> Heading) -> Result<(), RobotError> {
        match &mut self.state {
            RobotState::Placed { heading, .. } => {
                *heading = turn(*heading);
                Ok(())
            }
            RobotState::Unplaced => Err(RobotError::NotPlaced),
        }
    }

    /// Returns the current position and heading (`REPORT`).
    pub fn report(&self) -> Result<Report, RobotError> {
        match self.state {
            RobotState::Placed { position, heading } => Ok(Report { position, heading }),
            RobotState::Unplaced => Err(RobotError::NotPlaced),
        }
    }
}

fn on_table(position: Position) -> Result<Position, RobotError> {
    if table::contains(position) {
        Ok(position)
    } else {
        Err(RobotError::OffTable {
            x: position.x,
            y: position.y,
        })
    }
}

fn parse_coordinate(raw: &str) -> Result<i32, RobotError> {
    raw.parse::<i32>()
        .map_err(|_| RobotError::InvalidCoordinate(raw.to_string()))
}
