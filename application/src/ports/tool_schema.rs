//! Tool schema conversion port.
//!
//! The domain decides which tools a role may call; this port turns those
//! definitions into the JSON Schema a model backend expects.

use pecko_domain::tool::entities::ToolDefinition;

pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert a set of tools, keeping their order.
    fn tools_schema(&self, tools: &[ToolDefinition]) -> Vec<serde_json::Value> {
        tools.iter().map(|t| self.tool_to_schema(t)).collect()
    }
}
