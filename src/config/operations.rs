//! Config loading and validation.

use super::model::CollaboratorConfig;
use crate::error::{DispatchError, Result};
use std::path::Path;

impl CollaboratorConfig {
    /// Load config from a YAML file, or return defaults when it does not exist.
    ///
    /// # Returns
    ///
    /// * `Ok(CollaboratorConfig)` - Parsed and validated config, or defaults
    /// * `Err(DispatchError::Config)` - Unreadable file, parse error, or validation failure
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            DispatchError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            DispatchError::Config(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: CollaboratorConfig = serde_yaml::from_str(yaml)
            .map_err(|e| DispatchError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - interpreters and script names must be non-empty
    /// - script names must be bare file names, resolved inside the installation directory
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("posix_shell", &self.posix_shell),
            ("posix_script", &self.posix_script),
            ("windows_host", &self.windows_host),
            ("windows_script", &self.windows_script),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(DispatchError::Config(format!(
                    "config validation failed: {} must be non-empty",
                    name
                )));
            }
        }

        for (name, value) in [
            ("posix_script", &self.posix_script),
            ("windows_script", &self.windows_script),
        ] {
            if value.contains('/') || value.contains('\\') || value == ".." || value == "." {
                return Err(DispatchError::Config(format!(
                    "config validation failed: {} must be a file name, got '{}'",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
