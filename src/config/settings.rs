//! Startup settings: version string and installation directory.

use super::model::CollaboratorConfig;
use crate::cli::BIN_NAME;
use crate::error::{DispatchError, Result};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the installation directory.
pub const HOME_OVERRIDE_ENV: &str = "AI_DOCS_SYSTEM_HOME";

/// Optional collaborator config file inside the installation directory.
pub const CONFIG_FILE_NAME: &str = "dispatcher.yaml";

/// Values computed once per process run and passed into dispatch.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Name shown in usage text and hints.
    pub program_name: String,

    /// Package version, e.g. "2.5.2".
    pub version: String,

    /// Absolute path to the directory holding the collaborator scripts.
    pub install_dir: PathBuf,
}

impl Settings {
    /// Resolve settings for the running executable.
    ///
    /// Reads `AI_DOCS_SYSTEM_HOME` and the executable location. The
    /// collaborator config is not touched here; see `load_collaborators`.
    pub fn resolve() -> Result<Self> {
        let exe = env::current_exe()
            .map_err(|e| DispatchError::io("failed to locate the running executable", e))?;
        Self::resolve_from(env::var_os(HOME_OVERRIDE_ENV), &exe)
    }

    /// Resolve settings from an explicit override and executable path.
    pub fn resolve_from(home_override: Option<OsString>, exe: &Path) -> Result<Self> {
        let install_dir = match home_override.filter(|value| !value.is_empty()) {
            Some(home) => std::path::absolute(PathBuf::from(home)).map_err(|e| {
                DispatchError::io(format!("failed to resolve {}", HOME_OVERRIDE_ENV), e)
            })?,
            None => install_dir_from_exe(exe),
        };
        Ok(Self::with_install_dir(install_dir))
    }

    /// Settings rooted at `install_dir`.
    pub fn with_install_dir(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            program_name: BIN_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            install_dir: install_dir.into(),
        }
    }

    /// Location of the optional collaborator config file.
    pub fn config_path(&self) -> PathBuf {
        self.install_dir.join(CONFIG_FILE_NAME)
    }

    /// Load `dispatcher.yaml` from the installation directory, or defaults
    /// when it is absent. Only operational commands need this.
    pub fn load_collaborators(&self) -> Result<CollaboratorConfig> {
        CollaboratorConfig::load_or_default(self.config_path())
    }

    /// The line printed by `version`.
    pub fn version_line(&self) -> String {
        format!("AI Docs System v{}", self.version)
    }
}

/// The installation directory is one level above the executable's own
/// directory (`<install>/bin/ai-docs-system`). Symlinks to the executable
/// are followed first.
pub(super) fn install_dir_from_exe(exe: &Path) -> PathBuf {
    let exe = std::fs::canonicalize(exe).unwrap_or_else(|_| exe.to_path_buf());
    let bin_dir = exe.parent().unwrap_or(Path::new("."));
    bin_dir.parent().unwrap_or(bin_dir).to_path_buf()
}
