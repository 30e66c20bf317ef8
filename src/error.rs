//! Error types for the ai-docs-system dispatcher.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every variant is terminal: it is reported on stderr and the process exits
//! with the variant's exit code. A collaborator exiting non-zero is not an
//! error here; its code is propagated as a normal outcome.

use crate::config::HOME_OVERRIDE_ENV;
use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dispatcher operations.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The resolved collaborator script does not exist on disk.
    #[error("collaborator script not found: {}", .path.display())]
    ScriptNotFound { path: PathBuf },

    /// The collaborator process could not be started.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
        /// Suggested manual fallbacks, one per line.
        hints: Vec<String>,
    },

    /// The first argument is not part of the command vocabulary.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Invalid dispatcher configuration or installation layout.
    #[error("{0}")]
    Config(String),

    /// Console output or environment lookup failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl DispatchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::ScriptNotFound { .. }
            | DispatchError::Spawn { .. }
            | DispatchError::UnknownCommand(_)
            | DispatchError::Config(_)
            | DispatchError::Io { .. } => exit_codes::FAILURE,
        }
    }

    /// Follow-up suggestions printed after the error message.
    pub fn hints(&self, program_name: &str) -> Vec<String> {
        match self {
            DispatchError::Spawn { hints, .. } => hints.clone(),
            DispatchError::UnknownCommand(_) => vec![format!("run: {} help", program_name)],
            DispatchError::ScriptNotFound { .. } => {
                vec![format!(
                    "reinstall the package or set {} to the directory holding the scripts",
                    HOME_OVERRIDE_ENV
                )]
            }
            DispatchError::Config(_) | DispatchError::Io { .. } => Vec::new(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        DispatchError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for dispatcher operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
