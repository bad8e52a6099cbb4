//! Tool dispatch node: run one tool call of the latest AI message.

use crate::ports::tool_executor::ToolExecutorPort;
use pecko_domain::{
    Message, RoleDefinition, ToolCall, ToolError, ToolName, ToolResult, ToolResultMessage,
};
use tracing::warn;

/// Execute `call` on behalf of `role`.
///
/// Unknown names and tools outside the role's allowed set never reach the
/// executor; they come back as configuration-error results so the model can
/// read them like any other tool failure.
pub(super) async fn dispatch<T: ToolExecutorPort + ?Sized>(
    executor: &T,
    role: &RoleDefinition,
    call: &ToolCall,
) -> ToolResult {
    let name = match call.tool_name() {
        Ok(name) => name,
        Err(e) => {
            warn!("{} requested unknown tool '{}'", role.name(), call.name);
            return ToolResult::failure(&call.name, ToolError::not_allowed(e.to_string()));
        }
    };

    if !role.allowed_tools().contains(name) {
        warn!(
            "{} requested '{}' outside its allowed tools {:?}",
            role.name(),
            name,
            role.allowed_tools().names()
        );
        return not_allowed(name, role);
    }

    if !executor.has_tool(name) {
        warn!("Tool '{}' is not registered with the executor", name);
        return ToolResult::failure(
            name.as_str(),
            ToolError::not_allowed(format!("tool '{}' is not available", name)),
        );
    }

    executor.execute(call).await
}

fn not_allowed(name: ToolName, role: &RoleDefinition) -> ToolResult {
    ToolResult::failure(
        name.as_str(),
        ToolError::not_allowed(format!(
            "tool '{}' is not available to the {} role",
            name,
            role.name()
        )),
    )
}

/// Wrap a result as the message answering `call`
pub(super) fn result_message(call: &ToolCall, result: &ToolResult) -> Message {
    Message::ToolResult(ToolResultMessage {
        call_id: call.call_id.clone(),
        tool_name: call.name.clone(),
        content: result.content(),
        is_error: !result.is_success(),
    })
}
