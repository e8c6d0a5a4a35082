//! Error types for the robot and the command session.
//!
//! Uses thiserror for derive macros. None of the robot errors are fatal: a
//! failed command leaves the robot exactly as it was and the session moves on.

use thiserror::Error;

/// Why a single robot operation was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RobotError {
    /// PLACE did not receive exactly `expected` comma-separated arguments.
    #[error("PLACE expects {expected} arguments, got {found}")]
    ArgumentCount { expected: usize, found: usize },

    /// A coordinate token is not an integer.
    #[error("invalid coordinate `{0}`")]
    InvalidCoordinate(String),

    /// A placement target lies outside the table.
    #[error("position ({x},{y}) is off the table")]
    OffTable { x: i32, y: i32 },

    /// A heading token is not one of NORTH, EAST, SOUTH or WEST.
    #[error("unknown heading `{0}`")]
    UnknownHeading(String),

    /// The robot has not been placed yet.
    #[error("robot has not been placed")]
    NotPlaced,

    /// A move would have taken the robot off the table.
    #[error("move to ({x},{y}) would leave the table")]
    Blocked { x: i32, y: i32 },
}

/// Broad classification of a [`RobotError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad PLACE arguments: count, coordinates, or heading.
    InvalidArgument,
    /// The operation needs a placed robot.
    PreconditionFailure,
    /// The robot refused to step off the edge.
    Blocked,
}

impl RobotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RobotError::ArgumentCount { .. }
            | RobotError::InvalidCoordinate(_)
            | RobotError::OffTable { .. }
            | RobotError::UnknownHeading(_) => ErrorKind::InvalidArgument,
            RobotError::NotPlaced => ErrorKind::PreconditionFailure,
            RobotError::Blocked { .. } => ErrorKind::Blocked,
        }
    }
}

/// Failures that end a command session early.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
