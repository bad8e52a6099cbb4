//! Tool implementations
//!
//! The file tools (`list_files`, `read_file`, `write_file`), the path sandbox
//! confining them to the workspace root, and the executor that dispatches
//! calls to them.

pub mod file;
pub mod sandbox;
pub mod schema;

mod executor;

pub use executor::LocalToolExecutor;
pub use sandbox::{SandboxError, WorkspaceSandbox};
pub use schema::JsonSchemaToolConverter;

use pecko_domain::tool::entities::ToolSpec;

/// Create the default tool specification with all available tools
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(file::list_files_definition())
        .register(file::read_file_definition())
        .register(file::write_file_definition())
}

/// Definitions for tools that never modify the workspace
pub fn read_only_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(file::list_files_definition())
        .register(file::read_file_definition())
}
