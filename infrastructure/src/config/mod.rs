//! Configuration file loading for pecko
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PECKO_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Workspace: `<root>/.pecko/config.toml`
//! 4. Global: `$XDG_CONFIG_HOME/pecko/config.toml`
//! 5. Default values
//!
//! Everything is resolved into domain types before a run starts; nothing in
//! this module is consulted while the workflow is executing.

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    CONFIG_VERSION, ConfigIssue, FileConfig, FileLoggingConfig, FileProfileConfig, FileRoleConfig,
    FileWorkflowConfig, ResolvedProfile, Severity,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
