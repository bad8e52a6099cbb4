//! Tool domain module
//!
//! Defines how roles interact with the workspace: every tool is described by
//! a [`ToolDefinition`], invoked through a [`ToolCall`] and answers with a
//! textual [`ToolResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (text)       │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        └─ ToolSet: the subset a role may call
//! ```
//!
//! # Capability scoping
//!
//! | Role | `list_files` | `read_file` | `write_file` |
//! |------|:---:|:---:|:---:|
//! | agent | yes | yes | yes |
//! | planner | yes | yes | - |
//! | worker | yes | yes | yes |
//! | reviewer | yes | yes | - |
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`): port trait for tool execution
//! - **Infrastructure** (`LocalToolExecutor`): sandboxed file I/O

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolName, ToolSet, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolOutput, ToolResult};
