//! Parsed form of a single dispatcher run.
//!
//! An `Invocation` lives for exactly one process run: it is produced by
//! `cli::parse_arguments`, consumed by `commands::dispatch`, and never stored.

use std::fmt;
use std::path::PathBuf;

/// Operational commands that are delegated to the collaborator script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Install,
    Update,
    Uninstall,
    Audit,
}

impl Operation {
    /// All operations, in help-text order.
    pub const ALL: [Operation; 4] = [
        Operation::Install,
        Operation::Update,
        Operation::Uninstall,
        Operation::Audit,
    ];

    /// The mode string handed to the collaborator. Mirrors the command name.
    pub fn mode(self) -> &'static str {
        match self {
            Operation::Install => "install",
            Operation::Update => "update",
            Operation::Uninstall => "uninstall",
            Operation::Audit => "audit",
        }
    }

    /// One-line description for usage text.
    pub fn summary(self) -> &'static str {
        match self {
            Operation::Install => "Install into a project (default: current directory)",
            Operation::Update => "Update an existing installation",
            Operation::Uninstall => "Remove from a project",
            Operation::Audit => "Check documentation health",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode())
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Delegate `operation` to the collaborator for `target_path`.
    Run {
        operation: Operation,
        target_path: PathBuf,
    },
    /// `version`, `--version`, `-v`.
    Version,
    /// `help`, `--help`, `-h`, or no arguments.
    Help,
    /// Anything outside the vocabulary; carries the offending token.
    Unknown(String),
}

impl Invocation {
    /// Mode passed to the collaborator, if this invocation delegates.
    #[cfg(test)]
    pub fn mode(&self) -> Option<&'static str> {
        match self {
            Invocation::Run { operation, .. } => Some(operation.mode()),
            _ => None,
        }
    }
}
