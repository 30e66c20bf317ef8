//! Delegation of operational commands to the collaborator script.

use super::DispatchContext;
use crate::collaborator::PlatformScript;
use crate::error::{DispatchError, Result};
use crate::launch::LaunchRequest;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

/// Environment variable carrying the installation directory to the collaborator.
pub const INSTALL_DIR_ENV: &str = "SCRIPT_DIR";

/// Run `script` for `target_path` in `mode` and return its exit code.
///
/// The script must exist before anything is spawned. The child runs in the
/// installation directory with `SCRIPT_DIR` added to the inherited
/// environment.
pub fn invoke<W: Write>(
    ctx: &DispatchContext<'_>,
    script: &PlatformScript,
    target_path: &Path,
    mode: &str,
    out: &mut W,
) -> Result<i32> {
    if !script.script.exists() {
        return Err(DispatchError::ScriptNotFound {
            path: script.script.clone(),
        });
    }

    ctx.console
        .status(out, &format!("Running {}...", script.display_name()))
        .and_then(|_| out.flush())
        .map_err(|e| DispatchError::io("failed to write output", e))?;

    let install_dir = &ctx.settings.install_dir;
    let request = LaunchRequest {
        program: script.interpreter.clone(),
        args: script.arguments(target_path, mode),
        working_dir: install_dir.clone(),
        env: vec![(
            INSTALL_DIR_ENV.to_string(),
            OsString::from(install_dir.as_os_str()),
        )],
    };

    ctx.launcher
        .launch(&request)
        .map_err(|source| DispatchError::Spawn {
            program: script.interpreter.clone(),
            source,
            hints: ctx.resolver.spawn_hints(script, target_path, mode),
        })
}
