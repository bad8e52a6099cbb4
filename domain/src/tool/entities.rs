//! Tool domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identifier of a built-in tool.
///
/// The set is closed: a name the model invents that is not listed here
/// never reaches a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    ListFiles,
    ReadFile,
    WriteFile,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [ToolName::ListFiles, ToolName::ReadFile, ToolName::WriteFile];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::ListFiles => "list_files",
            ToolName::ReadFile => "read_file",
            ToolName::WriteFile => "write_file",
        }
    }

    /// Whether the tool only observes the workspace
    pub fn is_read_only(&self) -> bool {
        !matches!(self, ToolName::WriteFile)
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ToolName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTool(s.to_string()))
    }
}

/// Set of tools a role is allowed to call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSet(BTreeSet<ToolName>);

impl ToolSet {
    pub fn new(tools: impl IntoIterator<Item = ToolName>) -> Self {
        Self(tools.into_iter().collect())
    }

    /// `list_files`, `read_file` and `write_file`
    pub fn full() -> Self {
        Self::new(ToolName::ALL)
    }

    /// `list_files` and `read_file`
    pub fn read_only() -> Self {
        Self::new(ToolName::ALL.into_iter().filter(ToolName::is_read_only))
    }

    pub fn contains(&self, tool: ToolName) -> bool {
        self.0.contains(&tool)
    }

    pub fn iter(&self) -> impl Iterator<Item = ToolName> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|t| t.as_str()).collect()
    }
}

/// Definition of a tool that can be offered to a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool identifier
    pub name: ToolName,
    /// Human-readable description shown to the model
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "path")
    pub param_type: String,
    /// Value used when the argument is omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl ToolDefinition {
    pub fn new(name: ToolName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
            default: None,
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Registry of tool definitions, keyed by [`ToolName`]
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: BTreeMap<ToolName, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name, tool);
        self
    }

    pub fn get(&self, name: ToolName) -> Option<&ToolDefinition> {
        self.tools.get(&name)
    }

    /// Look up a definition by the raw name a model used
    pub fn get_by_name(&self, name: &str) -> Option<&ToolDefinition> {
        name.parse::<ToolName>().ok().and_then(|t| self.get(t))
    }

    /// All definitions, ordered by name
    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = ToolName> + '_ {
        self.tools.keys().copied()
    }

    /// Definitions restricted to `allowed`, ordered by name
    pub fn filtered(&self, allowed: &ToolSet) -> Vec<ToolDefinition> {
        self.all()
            .filter(|t| allowed.contains(t.name))
            .cloned()
            .collect()
    }
}

/// A model-issued request to invoke a tool
///
/// `name` is kept as the raw string the model produced; it is only resolved
/// to a [`ToolName`] at dispatch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Identifier assigned by the backend, echoed back in the tool result
    pub call_id: String,
    /// Name of the tool to call
    pub name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(call_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            name: name.into(),
            arguments: serde_json::Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Resolve the raw name against the closed tool set
    pub fn tool_name(&self) -> Result<ToolName, DomainError> {
        self.name.parse()
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }
}
