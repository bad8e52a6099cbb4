//! Model profiles from TOML (`[profiles.<name>]` sections)

use pecko_domain::Model;
use serde::{Deserialize, Serialize};

/// One named model/endpoint/credential set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProfileConfig {
    /// Model identifier sent to the backend (default: "gpt-4o")
    pub model: String,
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    /// Environment variable holding the API key (default: "OPENAI_API_KEY")
    pub api_key_env: String,
    /// Direct API key (not recommended; use `api_key_env` instead)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for FileProfileConfig {
    fn default() -> Self {
        Self {
            model: Model::DEFAULT.to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

/// A profile with its credential looked up, ready to build a gateway from.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub name: String,
    pub model: Model,
    pub base_url: String,
    pub api_key: String,
}

impl std::fmt::Debug for ResolvedProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedProfile")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
