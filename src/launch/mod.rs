//! Collaborator process launching.
//!
//! The child inherits stdin, stdout, and stderr, so the user sees the
//! script's output live. The dispatcher waits for the child without a
//! timeout and reports its exit code unchanged.
//!
//! Interrupt signals are not intercepted or forwarded. On a terminal the
//! child shares the dispatcher's foreground process group and receives
//! Ctrl-C directly.

use crate::exit_codes;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Everything needed to start the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Interpreter looked up on PATH (or an absolute path).
    pub program: String,
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
    /// Variables added on top of the inherited environment.
    pub env: Vec<(String, OsString)>,
}

/// Starts a collaborator and waits for it.
pub trait ProcessLauncher {
    /// Run to completion and return the child's exit code.
    ///
    /// `Err` means the process could not be started (or waited on).
    fn launch(&self, request: &LaunchRequest) -> io::Result<i32>;
}

/// Production launcher: inherited stdio, inherited environment plus extras.
#[derive(Debug, Clone, Copy, Default)]
pub struct InheritedStdio;

impl ProcessLauncher for InheritedStdio {
    fn launch(&self, request: &LaunchRequest) -> io::Result<i32> {
        let mut command = Command::new(&request.program);
        command
            .args(&request.args)
            .current_dir(&request.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        for (key, value) in &request.env {
            command.env(key, value);
        }

        let status = command.spawn()?.wait()?;
        Ok(exit_code_of(status))
    }
}

/// Exit code to propagate for a finished child.
///
/// A child killed by a signal maps to `128 + signal`, the shell convention.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }

    exit_codes::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(dir: &TempDir, program: &str, args: &[&str]) -> LaunchRequest {
        LaunchRequest {
            program: program.to_string(),
            args: args.iter().map(OsString::from).collect(),
            working_dir: dir.path().to_path_buf(),
            env: Vec::new(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_propagates_exit_codes() {
        let temp_dir = TempDir::new().unwrap();
        for code in [0, 1, 2, 42] {
            let req = request(&temp_dir, "sh", &["-c", &format!("exit {}", code)]);
            assert_eq!(InheritedStdio.launch(&req).unwrap(), code);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_sets_working_dir_and_env() {
        let temp_dir = TempDir::new().unwrap();
        let mut req = request(
            &temp_dir,
            "sh",
            &["-c", "printf '%s|%s' \"$PWD\" \"$EXTRA_VAR\" > out.txt"],
        );
        req.env
            .push(("EXTRA_VAR".to_string(), OsString::from("extra_value")));

        assert_eq!(InheritedStdio.launch(&req).unwrap(), 0);

        let out = std::fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
        let (pwd, extra) = out.split_once('|').unwrap();
        assert_eq!(
            std::fs::canonicalize(pwd).unwrap(),
            std::fs::canonicalize(temp_dir.path()).unwrap()
        );
        assert_eq!(extra, "extra_value");
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_inherits_environment() {
        let temp_dir = TempDir::new().unwrap();
        let req = request(&temp_dir, "sh", &["-c", "test -n \"$PATH\""]);
        assert_eq!(InheritedStdio.launch(&req).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_exit_maps_to_128_plus_signal() {
        let temp_dir = TempDir::new().unwrap();
        let req = request(&temp_dir, "sh", &["-c", "kill -TERM $$"]);
        assert_eq!(InheritedStdio.launch(&req).unwrap(), 128 + 15);
    }

    #[test]
    fn test_launch_missing_program_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let req = request(&temp_dir, "nonexistent_interpreter_xyz_123", &[]);
        let err = InheritedStdio.launch(&req).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
