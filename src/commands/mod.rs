//! Command implementations for ai-docs-system.
//!
//! This module provides the dispatcher that routes a parsed invocation to
//! its implementation. Operational commands are delegated to the
//! collaborator script; `help` and `version` are answered locally.

mod help;
mod run;


use crate::collaborator::{CollaboratorResolver, OsFamily, select_collaborator};
use crate::config::{CollaboratorConfig, Settings};
use crate::error::{DispatchError, Result};
use crate::exit_codes;
use crate::invocation::Invocation;
use crate::launch::ProcessLauncher;
use crate::output::Console;
use std::io::Write;

/// Collaborators and settings injected into dispatch.
pub struct DispatchContext<'a> {
    pub settings: &'a Settings,
    pub resolver: &'a dyn CollaboratorResolver,
    pub launcher: &'a dyn ProcessLauncher,
    pub console: Console,
}

/// Select the collaborator for `os` and dispatch.
///
/// `dispatcher.yaml` is read only for operational commands, so a broken
/// config file never gets in the way of `help` or `version`.
pub fn execute<W: Write>(
    invocation: Invocation,
    settings: &Settings,
    os: OsFamily,
    launcher: &dyn ProcessLauncher,
    console: Console,
    out: &mut W,
) -> Result<i32> {
    let collaborators = match invocation {
        Invocation::Run { .. } => settings.load_collaborators()?,
        _ => CollaboratorConfig::default(),
    };
    let resolver = select_collaborator(os, &collaborators);
    let ctx = DispatchContext {
        settings,
        resolver: resolver.as_ref(),
        launcher,
        console,
    };
    dispatch(invocation, &ctx, out)
}

/// Dispatch an invocation to its implementation.
///
/// Returns the exit code the process should end with: the collaborator's own
/// code for operational commands, `SUCCESS` for help and version.
pub fn dispatch<W: Write>(
    invocation: Invocation,
    ctx: &DispatchContext<'_>,
    out: &mut W,
) -> Result<i32> {
    match invocation {
        Invocation::Run {
            operation,
            target_path,
        } => {
            let script = ctx.resolver.resolve(&ctx.settings.install_dir);
            run::invoke(ctx, &script, &target_path, operation.mode(), out)
        }
        Invocation::Version => {
            help::cmd_version(ctx.settings, out)
                .map_err(|e| DispatchError::io("failed to write output", e))?;
            Ok(exit_codes::SUCCESS)
        }
        Invocation::Help => {
            help::cmd_help(ctx.settings, out)
                .map_err(|e| DispatchError::io("failed to write output", e))?;
            Ok(exit_codes::SUCCESS)
        }
        Invocation::Unknown(token) => Err(DispatchError::UnknownCommand(token)),
    }
}
