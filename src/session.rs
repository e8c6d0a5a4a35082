//! Line-oriented command session.
//!
//! Reads commands from any [`BufRead`], runs them through a
//! [`CommandInterpreter`], and writes report lines to any [`Write`].

use crate::error::Result;
use crate::interpreter::{CommandInterpreter, Outcome};
use crate::robot::Report;
use log::{debug, info};
use std::io::{BufRead, Write};

/// How report lines are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Output: X,Y,F`
    #[default]
    Text,
    /// One JSON object per report.
    Json,
}

/// Configuration for a command session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Rendering of `REPORT` output.
    pub format: OutputFormat,
    /// End the session at the first empty line (a bare `\n`), as typed at a
    /// console to finish input. When false, empty lines are no-ops and only
    /// end of input stops the session, which is how a piped command file
    /// with blank separators should be read. Whitespace-only lines are
    /// always no-ops.
    pub stop_at_empty_line: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            stop_at_empty_line: true,
        }
    }
}

/// Tally of what a session did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines consumed, including the terminating empty line if there was one.
    pub lines_read: usize,
    pub applied: usize,
    pub reported: usize,
    pub rejected: usize,
    pub ignored: usize,
}

/// Runs a session over `input` with a fresh robot.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &SessionConfig,
) -> Result<SessionSummary> {
    let mut interpreter = CommandInterpreter::new();
    run_with(&mut interpreter, input, output, config)
}

/// Runs a session over `input`, driving an existing interpreter.
pub fn run_with<R: BufRead, W: Write>(
    interpreter: &mut CommandInterpreter,
    mut input: R,
    output: &mut W,
    config: &SessionConfig,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines_read += 1;

        let Ok(line) = std::str::from_utf8(trim_line_ending(&buf)) else {
            debug!("ignored line {}: not valid UTF-8", summary.lines_read);
            summary.ignored += 1;
            continue;
        };

        if line.is_empty() && config.stop_at_empty_line {
            debug!("empty line, ending session");
            break;
        }

        match interpreter.execute(line) {
            Outcome::Applied => summary.applied += 1,
            Outcome::Reported(report) => {
                write_report(output, &report, config.format)?;
                summary.reported += 1;
            }
            Outcome::Rejected(_) => summary.rejected += 1,
            Outcome::Ignored => summary.ignored += 1,
        }
    }

    output.flush()?;
    info!(
        "session ended after {} lines ({} applied, {} reported, {} rejected, {} ignored)",
        summary.lines_read, summary.applied, summary.reported, summary.rejected, summary.ignored
    );
    Ok(summary)
}

fn trim_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

fn write_report<W: Write>(output: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, report)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
