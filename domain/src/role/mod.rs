//! Role domain.
//!
//! - [`entities::RoleKind`]: the fixed personas (`agent`, `planner`, `worker`, `reviewer`)
//! - [`entities::RoleDefinition`]: prompt, tool subset and model binding of one role
//! - [`prompts::RolePrompts`]: default system prompts

pub mod entities;
pub mod prompts;

pub use entities::{RoleDefinition, RoleKind};
