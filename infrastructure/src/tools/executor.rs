//! Local tool executor: the concrete implementation of [`ToolExecutorPort`].
//!
//! ```text
//! ToolExecutorPort::execute_sync()
//!   ├─ unknown name      → NOT_FOUND result
//!   ├─ invalid arguments → INVALID_ARGUMENT result
//!   └─ ToolName match    → file::execute_*(sandbox, call)
//! ```

use super::file;
use super::sandbox::{SandboxError, WorkspaceSandbox};
use async_trait::async_trait;
use pecko_application::ports::tool_executor::ToolExecutorPort;
use pecko_domain::tool::{
    entities::{ToolCall, ToolName, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
use std::path::Path;
use tracing::debug;

/// Executor that runs the file tools inside one workspace root.
#[derive(Debug, Clone)]
pub struct LocalToolExecutor {
    tool_spec: ToolSpec,
    sandbox: WorkspaceSandbox,
}

impl LocalToolExecutor {
    /// Executor with every built-in tool, confined to `root`
    pub fn new(root: impl AsRef<Path>) -> Result<Self, SandboxError> {
        Ok(Self::with_tools(
            WorkspaceSandbox::new(root)?,
            super::default_tool_spec(),
        ))
    }

    /// Executor with a custom tool spec
    pub fn with_tools(sandbox: WorkspaceSandbox, tool_spec: ToolSpec) -> Self {
        Self { tool_spec, sandbox }
    }

    pub fn root(&self) -> &Path {
        self.sandbox.root()
    }

    fn execute_internal(&self, call: &ToolCall) -> ToolResult {
        let Ok(name) = call.tool_name() else {
            return ToolResult::failure(
                &call.name,
                ToolError::not_found(format!("Unknown tool: {}", call.name)),
            );
        };

        let Some(definition) = self.tool_spec.get(name) else {
            return ToolResult::failure(
                name.as_str(),
                ToolError::not_found(format!("Tool '{}' is not registered", name)),
            );
        };

        if let Err(e) = DefaultToolValidator.validate(call, definition) {
            return match name {
                ToolName::ListFiles => {
                    ToolResult::failure_lines(name.as_str(), ToolError::invalid_argument(e))
                }
                _ => ToolResult::failure(name.as_str(), ToolError::invalid_argument(e)),
            };
        }

        debug!("Executing {} ({})", name, call.call_id);

        match name {
            ToolName::ListFiles => file::execute_list_files(&self.sandbox, call),
            ToolName::ReadFile => file::execute_read_file(&self.sandbox, call),
            ToolName::WriteFile => file::execute_write_file(&self.sandbox, call),
        }
    }
}

#[async_trait]
impl ToolExecutorPort for LocalToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        self.execute_internal(call)
    }

    /// Runs the blocking file I/O off the async worker threads.
    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let executor = self.clone();
        let owned = call.clone();
        match tokio::task::spawn_blocking(move || executor.execute_internal(&owned)).await {
            Ok(result) => result,
            Err(e) => ToolResult::failure(
                &call.name,
                ToolError::execution_failed(format!("tool task failed: {}", e)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_executor_has_all_tools() {
        let dir = tempdir().unwrap();
        let executor = LocalToolExecutor::new(dir.path()).unwrap();

        for tool in ToolName::ALL {
            assert!(executor.has_tool(tool));
        }
    }

    #[test]
    fn test_executor_read_only_spec() {
        let dir = tempdir().unwrap();
        let executor = LocalToolExecutor::with_tools(
            WorkspaceSandbox::new(dir.path()).unwrap(),
            crate::tools::read_only_tool_spec(),
        );

        assert!(executor.has_tool(ToolName::ReadFile));
        assert!(!executor.has_tool(ToolName::WriteFile));

        let result = executor.execute_sync(
            &ToolCall::new("w", "write_file")
                .with_arg("file_path", "a.txt")
                .with_arg("content", "x"),
        );
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
        assert!(!dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_executor_unknown_tool() {
        let dir = tempdir().unwrap();
        let executor = LocalToolExecutor::new(dir.path()).unwrap();

        let result = executor.execute_sync(&ToolCall::new("c", "run_command"));

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
    }

    #[test]
    fn test_executor_rejects_unknown_argument() {
        let dir = tempdir().unwrap();
        let executor = LocalToolExecutor::new(dir.path()).unwrap();

        let call = ToolCall::new("l", "list_files").with_arg("recursive", true);
        let result = executor.execute_sync(&call);

        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        assert_eq!(result.output.as_lines().map(|l| l.len()), Some(1));
    }

    #[tokio::test]
    async fn test_executor_write_file() {
        let dir = tempdir().unwrap();
        let executor = LocalToolExecutor::new(dir.path()).unwrap();

        let call = ToolCall::new("w", "write_file")
            .with_arg("file_path", "notes.txt")
            .with_arg("content", "hello");
        let result = executor.execute(&call).await;

        assert!(result.is_success());
        assert_eq!(
            fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
            "hello"
        );
    }
}
