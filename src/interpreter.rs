//! Interpreter that turns command lines into [`Robot`] operations.
//!
//! The entry point is [`CommandInterpreter`]. It owns the session's robot;
//! feed it one line at a time with [`CommandInterpreter::execute`] and surface
//! any [`Outcome::Reported`] it hands back. Unknown keywords and malformed
//! arguments never escape as errors: they become [`Outcome::Ignored`] or
//! [`Outcome::Rejected`] and the robot is left untouched.

use crate::error::RobotError;
use crate::robot::{Command, Report, Robot};
use log::debug;

/// Action keywords and the command each one maps to. Matched case-insensitively.
const KEYWORDS: [(&str, fn(Vec<String>) -> Command); 5] = [
    ("PLACE", Command::Place),
    ("MOVE", |_| Command::Move),
    ("LEFT", |_| Command::Left),
    ("RIGHT", |_| Command::Right),
    ("REPORT", |_| Command::Report),
];

impl Command {
    /// Parses one input line.
    ///
    /// The first whitespace token is the keyword. When there are more tokens,
    /// the last one is split on `,` into the argument list and any in between
    /// are dropped. Blank lines and unknown keywords parse to [`Command::Ignore`].
    pub fn parse(line: &str) -> Command {
        let mut tokens = line.split_whitespace();
        let Some(action) = tokens.next() else {
            return Command::Ignore;
        };

        let args: Vec<String> = tokens
            .last()
            .map(|raw| raw.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        KEYWORDS
            .into_iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(action))
            .map(|(_, build)| build(args))
            .unwrap_or(Command::Ignore)
    }
}

/// What happened when a line was executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command succeeded and produced no output.
    Applied,
    /// `REPORT` succeeded; the caller should surface this.
    Reported(Report),
    /// The command was refused; the robot is unchanged.
    Rejected(RobotError),
    /// Blank line or unknown keyword; the robot was never touched.
    Ignored,
}

/// Dispatches commands to the single robot of a session.
#[derive(Debug, Default)]
pub struct CommandInterpreter {
    robot: Robot,
}

impl CommandInterpreter {
    /// Creates an interpreter around a fresh, unplaced robot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing robot (builder pattern).
    pub fn with_robot(mut self, robot: Robot) -> Self {
        self.robot = robot;
        self
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Parses and applies a single line.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let command = Command::parse(line);
        debug!("{line:?} -> {command:?}");
        let outcome = self.apply(&command);
        match &outcome {
            Outcome::Rejected(err) => debug!("rejected {line:?}: {err}"),
            Outcome::Ignored => debug!("ignored {line:?}"),
            Outcome::Applied | Outcome::Reported(_) => {}
        }
        outcome
    }

    /// Applies an already-parsed command.
    pub fn apply(&mut self, command: &Command) -> Outcome {
        let result = match command {
            Command::Place(args) => {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                self.robot.place(&args)
            }
            Command::Move => self.robot.move_forward(),
            Command::Left => self.robot.turn_left(),
            Command::Right => self.robot.turn_right(),
            Command::Report => {
                return match self.robot.report() {
                    Ok(report) => Outcome::Reported(report),
                    Err(err) => Outcome::Rejected(err),
                };
            }
            Command::Ignore => return Outcome::Ignored,
        };

        match result {
            Ok(()) => Outcome::Applied,
            Err(err) => Outcome::Rejected(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Heading, Position};

    fn place_args(args: &[&str]) -> Command {
        Command::Place(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn parses_place_arguments() {
        assert_eq!(
            Command::parse("PLACE 1,2,EAST"),
            place_args(&["1", "2", "EAST"])
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(Command::parse("move"), Command::Move);
        assert_eq!(Command::parse("Left"), Command::Left);
        assert_eq!(Command::parse("rIgHt"), Command::Right);
        assert_eq!(Command::parse("report"), Command::Report);
        assert_eq!(Command::parse("place 0,0,NORTH"), place_args(&["0", "0", "NORTH"]));
    }

    #[test]
    fn place_without_arguments_has_empty_list() {
        assert_eq!(Command::parse("PLACE"), Command::Place(Vec::new()));
    }

    #[test]
    fn arguments_come_from_the_last_token() {
        assert_eq!(Command::parse("MOVE 1,2,3"), Command::Move);
        assert_eq!(
            Command::parse("PLACE 1,2,EAST 3,3,WEST"),
            place_args(&["3", "3", "WEST"])
        );
        assert_eq!(Command::parse("PLACE 0,0,NORTH junk"), place_args(&["junk"]));
    }

    #[test]
    fn place_with_trailing_junk_is_rejected() {
        let mut interpreter = CommandInterpreter::new();
        assert_eq!(
            interpreter.execute("PLACE 0,0,NORTH junk"),
            Outcome::Rejected(RobotError::ArgumentCount {
                expected: 3,
                found: 1
            })
        );
        assert!(!interpreter.robot().is_placed());
    }

    #[test]
    fn blank_and_unknown_lines_are_ignored() {
        assert_eq!(Command::parse(""), Command::Ignore);
        assert_eq!(Command::parse("   \t "), Command::Ignore);
        assert_eq!(Command::parse("AZERTY"), Command::Ignore);
        assert_eq!(Command::parse("asd asgtr hrt hrthrt"), Command::Ignore);
    }

    #[test]
    fn execute_reports_after_place() {
        let mut interpreter = CommandInterpreter::new();
        assert_eq!(interpreter.execute("PLACE 0,0,SOUTH"), Outcome::Applied);
        assert_eq!(
            interpreter.execute("REPORT"),
            Outcome::Reported(Report {
                position: Position::new(0, 0),
                heading: Heading::South,
            })
        );
    }

    #[test]
    fn execute_rejects_before_place() {
        let mut interpreter = CommandInterpreter::new();
        for line in ["MOVE", "LEFT", "RIGHT", "REPORT"] {
            assert_eq!(
                interpreter.execute(line),
                Outcome::Rejected(RobotError::NotPlaced)
            );
        }
        assert!(!interpreter.robot().is_placed());
    }

    #[test]
    fn malformed_place_is_rejected_not_fatal() {
        let mut interpreter = CommandInterpreter::new();
        assert_eq!(
            interpreter.execute("PLACE 1, 2, EAST"),
            Outcome::Rejected(RobotError::ArgumentCount {
                expected: 3,
                found: 1
            })
        );
        assert_eq!(interpreter.execute("PLACE 1,2,EAST"), Outcome::Applied);
    }

    #[test]
    fn with_robot_keeps_existing_state() {
        let mut robot = Robot::new();
        robot.place_at(Position::new(4, 4), Heading::East).unwrap();
        let mut interpreter = CommandInterpreter::new().with_robot(robot);
        assert!(matches!(
            interpreter.execute("MOVE"),
            Outcome::Rejected(RobotError::Blocked { x: 5, y: 4 })
        ));
        assert_eq!(interpreter.robot().position(), Some(Position::new(4, 4)));
    }
}
