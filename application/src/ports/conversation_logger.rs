//! Port for structured conversation logging.
//!
//! Separate from `tracing`: tracing carries diagnostics for humans, this port
//! records the run transcript in a machine-readable form (JSONL).

use pecko_domain::{AiMessage, RoleKind, ToolCall, ToolResult};
use serde_json::{Value, json};

/// A structured conversation event.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "agent_response", "tool_call").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn agent_response(role: RoleKind, message: &AiMessage) -> Self {
        Self::new(
            "agent_response",
            json!({
                "role": role.as_str(),
                "content": message.content,
                "tool_calls": message.tool_calls.len(),
            }),
        )
    }

    pub fn tool_call(role: RoleKind, call: &ToolCall) -> Self {
        Self::new(
            "tool_call",
            json!({
                "role": role.as_str(),
                "call_id": call.call_id,
                "tool": call.name,
                "arguments": call.arguments,
            }),
        )
    }

    pub fn tool_result(role: RoleKind, call: &ToolCall, result: &ToolResult) -> Self {
        Self::new(
            "tool_result",
            json!({
                "role": role.as_str(),
                "call_id": call.call_id,
                "tool": call.name,
                "success": result.is_success(),
                "content": result.content(),
            }),
        )
    }

    pub fn role_handoff(from: RoleKind, to: RoleKind) -> Self {
        Self::new(
            "role_handoff",
            json!({ "from": from.as_str(), "to": to.as_str() }),
        )
    }

    pub fn run_complete(steps: usize, messages: usize) -> Self {
        Self::new(
            "run_complete",
            json!({ "steps": steps, "messages": messages }),
        )
    }

    pub fn run_failed(error: &str, messages: usize) -> Self {
        Self::new(
            "run_failed",
            json!({ "error": error, "messages": messages }),
        )
    }
}

/// Records conversation events.
///
/// Synchronous and infallible: a failing transcript must never abort a run.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
