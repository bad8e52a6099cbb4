//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use crate::workspace;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override config keys
/// (`PECKO_WORKFLOW__TOPOLOGY=pipeline`).
pub const ENV_PREFIX: &str = "PECKO_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PECKO_*` environment variables (nested keys split on `__`)
    /// 2. Explicit config path (if provided)
    /// 3. Workspace: `<root>/.pecko/config.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/pecko/config.toml`
    /// 5. Default values
    pub fn load(
        config_path: Option<&Path>,
        workspace_root: Option<&Path>,
    ) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(root) = workspace_root {
            let path = workspace::config_path(root);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::Invalid(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: FileConfig = figment.extract().map_err(Box::new)?;
        tracing::debug!(
            profile = %config.active_profile,
            topology = %config.workflow.topology,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/pecko/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pecko").join(workspace::CONFIG_FILENAME))
    }

    /// Default configuration rendered as TOML, written by `pecko init`
    pub fn default_config_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&FileConfig::default())?)
    }
}
