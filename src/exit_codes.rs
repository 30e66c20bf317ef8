//! Exit code constants for the ai-docs-system dispatcher.
//!
//! The dispatcher only owns two codes:
//! - 0: Success (including help and version output)
//! - 1: Dispatcher failure (unknown command, missing script, spawn error, bad config)
//!
//! Any other code the process exits with belongs to the collaborator script
//! and is propagated unchanged.

use std::process::ExitCode;

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Dispatcher failure: unknown command, missing collaborator, spawn or config error.
pub const FAILURE: i32 = 1;

/// Base added to a signal number when a child is terminated by a signal.
pub const SIGNAL_BASE: i32 = 128;

/// Convert a propagated exit code into the process exit.
///
/// Codes that fit in a byte go through `ExitCode`; anything wider (Windows
/// allows full 32-bit codes) is handed straight to the OS.
pub fn to_exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(byte) => ExitCode::from(byte),
        Err(_) => std::process::exit(code),
    }
}
