//! Tool domain value objects: immutable result and error types
//!
//! Tools never raise past their boundary. Every failure becomes a
//! [`ToolResult`] whose output is `"Error: <message>"` text, so the model can
//! read the failure in the conversation and adapt.

use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing/wrong parameters |
/// | `NOT_FOUND` | Unknown tool or missing path |
/// | `OUTSIDE_WORKSPACE` | Path escapes the workspace root |
/// | `NOT_ALLOWED` | Tool is not bound to the calling role |
/// | `EXECUTION_FAILED` | I/O or decode failure |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "OUTSIDE_WORKSPACE")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn outside_workspace(message: impl Into<String>) -> Self {
        Self::new("OUTSIDE_WORKSPACE", message)
    }

    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::new("NOT_ALLOWED", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    /// Text the model sees for this failure
    pub fn to_result_text(&self) -> String {
        format!("Error: {}", self.message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Payload returned by a tool handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ToolOutput {
    /// Single text value (`read_file`, `write_file`)
    Text(String),
    /// Ordered sequence of strings (`list_files`)
    Lines(Vec<String>),
}

impl ToolOutput {
    /// Render the payload as message content.
    ///
    /// Line outputs are joined with newlines.
    pub fn render(&self) -> String {
        match self {
            ToolOutput::Text(text) => text.clone(),
            ToolOutput::Lines(lines) => lines.join("\n"),
        }
    }

    pub fn as_lines(&self) -> Option<&[String]> {
        match self {
            ToolOutput::Lines(lines) => Some(lines),
            ToolOutput::Text(_) => None,
        }
    }
}

/// Result of a tool execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// What the tool returned (already `"Error: ..."` text on failure)
    pub output: ToolOutput,
    /// Structured error, kept for logging and progress display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
}

impl ToolResult {
    /// Create a successful text result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            output: ToolOutput::Text(output.into()),
            error: None,
        }
    }

    /// Create a successful sequence result
    pub fn lines(tool_name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            output: ToolOutput::Lines(lines),
            error: None,
        }
    }

    /// Create a failed result carrying `"Error: ..."` text
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            output: ToolOutput::Text(error.to_result_text()),
            error: Some(error),
        }
    }

    /// Create a failed result shaped like a sequence: `["Error: ..."]`
    pub fn failure_lines(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            output: ToolOutput::Lines(vec![error.to_result_text()]),
            error: Some(error),
        }
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Output rendered as message content
    pub fn content(&self) -> String {
        self.output.render()
    }
}
