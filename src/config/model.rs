//! CollaboratorConfig struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Interpreter and script names used to reach the collaborator scripts.
///
/// This struct represents the contents of `<install_dir>/dispatcher.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollaboratorConfig {
    /// Shell used to run the POSIX script (default: "bash").
    pub posix_shell: String,

    /// POSIX script file name inside the installation directory (default: "install.sh").
    pub posix_script: String,

    /// Script host used on Windows (default: "powershell.exe").
    pub windows_host: String,

    /// Windows script file name inside the installation directory (default: "install.ps1").
    pub windows_script: String,
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            posix_shell: "bash".to_string(),
            posix_script: "install.sh".to_string(),
            windows_host: "powershell.exe".to_string(),
            windows_script: "install.ps1".to_string(),
        }
    }
}
