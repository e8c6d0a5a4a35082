//! Toy robot simulator entry point.
//!
//! Parses arguments, sets up logging, and runs a command session over stdin
//! or the given file. Reports go to stdout; logs go to stderr.

mod cli;

use cli::Cli;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use toy_robot::session;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .init();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> toy_robot::Result<()> {
    let config = cli.session_config();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match &cli.input {
        Some(path) => {
            log::info!("reading commands from {}", path.display());
            let file = File::open(path)?;
            session::run(BufReader::new(file), &mut output, &config)?;
        }
        None => {
            session::run(io::stdin().lock(), &mut output, &config)?;
        }
    }
    Ok(())
}
