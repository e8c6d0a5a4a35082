//! CLI argument parsing for toy-robot.
//!
//! Uses clap derive macros for declarative argument definitions.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use toy_robot::{OutputFormat, SessionConfig};

/// Toy robot simulator.
///
/// Reads one command per line (PLACE X,Y,F | MOVE | LEFT | RIGHT | REPORT)
/// and prints the robot's position on every REPORT. Input ends at the first
/// empty line or at end of file.
#[derive(Parser, Debug)]
#[command(name = "toy-robot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command file to read. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Rendering of REPORT output.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Keep reading past empty lines; only end of input stops the session.
    #[arg(long)]
    pub no_stop_at_empty_line: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            format: self.format.into(),
            stop_at_empty_line: !self.no_stop_at_empty_line,
        }
    }

    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
