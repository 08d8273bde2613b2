//! Runalone CLI entry point.
//!
//! Runs the guard for the wrapped command and, if it may proceed, runs the
//! command while the lock is held. Errors are reported with proper exit codes.

mod cli;
mod command;
mod logging;

use cli::Cli;
use runalone::config::ProcessEnv;
use runalone::guard::{self, Disposition, Outcome, TerminationPolicy};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> runalone::error::Result<ExitCode> {
    let options = match cli.setup_options() {
        Ok(options) => options,
        Err(err) => {
            let policy = TerminationPolicy::new(false, cli.program_name());
            return Ok(report_exit(&policy.resolve(&Outcome::ConfigError(err))));
        }
    };

    let report = guard::run(&options, &cli.identity(), &ProcessEnv);
    let disposition = report.disposition();
    if let Disposition::Exit { .. } = disposition {
        return Ok(report_exit(&disposition));
    }

    if let Some(notice) = disposition.message() {
        eprintln!("{}", notice);
    }

    // Held until the command finishes.
    let _lock = report.outcome.into_lock();
    let code = command::run(&cli.command)?;
    Ok(ExitCode::from(code as u8))
}

fn report_exit(disposition: &Disposition) -> ExitCode {
    if let Some(message) = disposition.message() {
        eprintln!("{}", message);
    }
    ExitCode::from(disposition.exit_code() as u8)
}
