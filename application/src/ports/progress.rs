//! Progress notification port
//!
//! Callbacks fired while a workflow runs. Every method has a no-op default so
//! implementations only override what they display.

use pecko_domain::{AiMessage, Model, RoleKind, ToolCall, ToolResult, Topology};

pub trait WorkflowProgressNotifier: Send + Sync {
    fn on_run_start(&self, _topology: Topology, _prompt: &str) {}

    /// A role is about to call the model
    fn on_agent_start(&self, _role: RoleKind, _model: &Model) {}

    fn on_agent_response(&self, _role: RoleKind, _message: &AiMessage) {}

    fn on_tool_call(&self, _role: RoleKind, _call: &ToolCall) {}

    fn on_tool_result(&self, _role: RoleKind, _call: &ToolCall, _result: &ToolResult) {}

    fn on_handoff(&self, _from: RoleKind, _to: RoleKind) {}

    fn on_run_complete(&self, _steps: usize) {}

    fn on_run_failed(&self, _error: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl WorkflowProgressNotifier for NoProgress {}
