//! `[workflow]`, `[logging]` and `[roles.<name>]` sections

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkflowConfig {
    /// "single" or "pipeline"
    pub topology: String,
    /// Optional guard on the number of steps per run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,
}

impl Default for FileWorkflowConfig {
    fn default() -> Self {
        Self {
            topology: "single".to_string(),
            max_steps: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write `.pecko/logs/<timestamp>.conversation.jsonl` for each run
    pub conversation_log: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            conversation_log: true,
        }
    }
}

/// Per-role overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoleConfig {
    /// Model for this role instead of the profile's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
