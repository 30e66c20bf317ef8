//! Configuration for the ai-docs-system dispatcher.
//!
//! `Settings` holds the values computed once at startup (version string,
//! installation directory) and is passed by reference into dispatch.
//! `CollaboratorConfig` represents the optional `dispatcher.yaml` that sits
//! next to the installer scripts. It supports forward-compatible YAML parsing
//! (unknown fields are ignored) and defaults for every field.

mod model;
mod operations;
mod settings;


// Re-export public API
pub use model::CollaboratorConfig;
pub use settings::{CONFIG_FILE_NAME, HOME_OVERRIDE_ENV, Settings};
