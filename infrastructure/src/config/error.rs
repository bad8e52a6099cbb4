//! Configuration errors

use thiserror::Error;

/// Errors raised while loading or resolving configuration.
///
/// All of them surface before a run starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Profile '{name}' not found (available: {})", available.join(", "))]
    ProfileNotFound { name: String, available: Vec<String> },

    #[error("No API key for profile '{profile}': set {env} or api_key in the profile")]
    MissingApiKey { profile: String, env: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}
