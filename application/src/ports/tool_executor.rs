//! Tool Executor port
//!
//! Defines the interface for executing workspace tools.

use async_trait::async_trait;
use pecko_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolName, ToolSpec},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// Implementations never fail past this boundary: every error is folded
/// into the returned [`ToolResult`].
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: ToolName) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: ToolName) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Execute a tool call synchronously (blocking)
    fn execute_sync(&self, call: &ToolCall) -> ToolResult;

    /// Execute a tool call.
    ///
    /// Default implementation runs [`execute_sync`](Self::execute_sync) inline.
    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.execute_sync(call)
    }
}
