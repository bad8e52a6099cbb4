//! Infrastructure layer for pecko
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the sandboxed file tools, the OpenAI-compatible model
//! backend, the JSONL transcript writer, configuration loading and workspace
//! management.

pub mod config;
pub mod logging;
pub mod providers;
pub mod tools;
pub mod workspace;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileConfig, ResolvedProfile, Severity,
};
pub use logging::JsonlConversationLogger;
pub use providers::OpenAiGateway;
pub use tools::{
    JsonSchemaToolConverter, LocalToolExecutor, SandboxError, WorkspaceSandbox,
    default_tool_spec, read_only_tool_spec,
};
pub use workspace::{InitOutcome, WorkspaceError, WorkspaceStatus};
