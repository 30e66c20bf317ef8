//! ai-docs-system: command dispatcher for the AI Docs System installer scripts.
//!
//! This is the main entry point for the `ai-docs-system` CLI. It parses
//! arguments, resolves settings once, dispatches to the matching command,
//! and exits with the collaborator's exit code or the dispatcher's own
//! error code.

mod cli;
mod collaborator;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
mod invocation;
mod launch;
mod output;

#[cfg(test)]
mod test_support;

use collaborator::OsFamily;
use config::Settings;
use error::{DispatchError, Result};
use launch::InheritedStdio;
use output::Console;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    let console = Console::detect();
    let argv: Vec<OsString> = std::env::args_os().skip(1).collect();

    match run(argv, console) {
        Ok(code) => exit_codes::to_exit_code(code),
        Err(err) => {
            // Print user-actionable error message and hints to stderr
            console.report_error(&err.to_string(), &err.hints(cli::BIN_NAME));

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(argv: Vec<OsString>, console: Console) -> Result<i32> {
    let cwd = std::env::current_dir()
        .map_err(|e| DispatchError::io("failed to get current working directory", e))?;
    let invocation = cli::parse_arguments(argv, &cwd);

    let settings = Settings::resolve()?;
    commands::execute(
        invocation,
        &settings,
        OsFamily::current(),
        &InheritedStdio,
        console,
        &mut std::io::stdout().lock(),
    )
}
