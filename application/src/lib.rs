//! Application layer for pecko
//!
//! This crate contains the workflow use case, port definitions, and
//! execution parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, WorkflowProgressNotifier},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::run_workflow::{
    RunWorkflowError, RunWorkflowOutput, RunWorkflowUseCase, StepSnapshot, WorkflowGraph,
};
