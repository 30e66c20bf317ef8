//! Collaborator script resolution.
//!
//! The real work happens in an external installer script. Which script, and
//! how it is called, depends on the host OS family:
//!
//! - POSIX: `<shell> <script> <target> <mode>`
//! - Windows: `<host> -ExecutionPolicy Bypass -File <script> -Target <target> -Mode <mode>`
//!
//! A resolver is selected once at startup and handed to the dispatcher, so
//! dispatch itself never branches on the platform.

use crate::config::CollaboratorConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Posix,
    Windows,
}

impl OsFamily {
    /// The family this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Posix
        }
    }
}

/// How target path and mode are handed to the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallingConvention {
    /// `<script> <target> <mode>`
    Positional,
    /// `-ExecutionPolicy Bypass -File <script> -Target <target> -Mode <mode>`
    Named,
}

/// A resolved collaborator: interpreter, absolute script path, and calling convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformScript {
    pub interpreter: String,
    pub script: PathBuf,
    pub convention: CallingConvention,
}

impl PlatformScript {
    /// Arguments passed to the interpreter.
    pub fn arguments(&self, target_path: &Path, mode: &str) -> Vec<OsString> {
        match self.convention {
            CallingConvention::Positional => vec![
                self.script.clone().into_os_string(),
                target_path.as_os_str().to_owned(),
                OsString::from(mode),
            ],
            CallingConvention::Named => vec![
                OsString::from("-ExecutionPolicy"),
                OsString::from("Bypass"),
                OsString::from("-File"),
                self.script.clone().into_os_string(),
                OsString::from("-Target"),
                target_path.as_os_str().to_owned(),
                OsString::from("-Mode"),
                OsString::from(mode),
            ],
        }
    }

    /// File name of the script, for progress messages.
    pub fn display_name(&self) -> String {
        self.script
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.script.display().to_string())
    }

    /// A command line that runs the script without the dispatcher.
    ///
    /// POSIX lines use shell quoting. Windows lines go through the host with
    /// the same execution policy the dispatcher uses, and paths are wrapped
    /// in double quotes, which both cmd.exe and PowerShell accept.
    pub fn direct_invocation(&self, target_path: &Path, mode: &str) -> String {
        let script = self.script.to_string_lossy();
        let target = target_path.to_string_lossy();
        match self.convention {
            CallingConvention::Positional => {
                shell_words::join([&*script, &*target, mode])
            }
            CallingConvention::Named => format!(
                "{} -ExecutionPolicy Bypass -File \"{}\" -Target \"{}\" -Mode {}",
                self.interpreter, script, target, mode
            ),
        }
    }
}

/// Resolves the collaborator script for one OS family.
pub trait CollaboratorResolver {
    /// Script location and calling convention, rooted at `install_dir`.
    fn resolve(&self, install_dir: &Path) -> PlatformScript;

    /// Hints shown when the interpreter cannot be started.
    fn spawn_hints(&self, script: &PlatformScript, target_path: &Path, mode: &str) -> Vec<String> {
        vec![format!(
            "or run the script directly: {}",
            script.direct_invocation(target_path, mode)
        )]
    }
}

/// POSIX shell collaborator (`install.sh` run by `bash`).
#[derive(Debug, Clone)]
pub struct PosixScript {
    pub shell: String,
    pub script_name: String,
}

impl CollaboratorResolver for PosixScript {
    fn resolve(&self, install_dir: &Path) -> PlatformScript {
        PlatformScript {
            interpreter: self.shell.clone(),
            script: install_dir.join(&self.script_name),
            convention: CallingConvention::Positional,
        }
    }

    fn spawn_hints(&self, script: &PlatformScript, target_path: &Path, mode: &str) -> Vec<String> {
        vec![
            format!("make sure {} is installed and on PATH", self.shell),
            format!(
                "or run the script directly: {}",
                script.direct_invocation(target_path, mode)
            ),
        ]
    }
}

/// Windows collaborator (`install.ps1` run by `powershell.exe`).
#[derive(Debug, Clone)]
pub struct WindowsScript {
    pub host: String,
    pub script_name: String,
}

impl CollaboratorResolver for WindowsScript {
    fn resolve(&self, install_dir: &Path) -> PlatformScript {
        PlatformScript {
            interpreter: self.host.clone(),
            script: install_dir.join(&self.script_name),
            convention: CallingConvention::Named,
        }
    }
}

/// Pick the collaborator for `os`.
pub fn select_collaborator(
    os: OsFamily,
    config: &CollaboratorConfig,
) -> Box<dyn CollaboratorResolver> {
    match os {
        OsFamily::Windows => Box::new(WindowsScript {
            host: config.windows_host.clone(),
            script_name: config.windows_script.clone(),
        }),
        OsFamily::Posix => Box::new(PosixScript {
            shell: config.posix_shell.clone(),
            script_name: config.posix_script.clone(),
        }),
    }
}
