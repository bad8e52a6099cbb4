//! Domain layer for pecko
//!
//! This crate contains the core entities and pure logic of the agent
//! workflow engine. It has no dependencies on I/O, model providers or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Roles
//!
//! A run is carried out by one or more **roles** (`agent`, `planner`,
//! `worker`, `reviewer`). Each role has a fixed system prompt, a subset of
//! tools it may call, and a model binding.
//!
//! ## Conversation
//!
//! All roles of a run share one append-only [`ConversationLog`]. Snapshots of
//! the log are cheap and never observe later appends.
//!
//! ## Workflow
//!
//! The [`workflow`] module holds the state machine: after every model turn
//! the run either enters the role's tool loop or hands off to the next role
//! chosen by a [`RoutingPolicy`].

pub mod conversation;
pub mod core;
pub mod role;
pub mod tool;
pub mod workflow;

// Re-export commonly used types
pub use conversation::{
    entities::{AiMessage, Message, MessageRole, ToolResultMessage},
    log::ConversationLog,
};
pub use core::{error::DomainError, model::Model};
pub use role::{RoleDefinition, RoleKind};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolName, ToolParameter, ToolSet, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolOutput, ToolResult},
};
pub use workflow::{
    graph::WorkflowGraphSpec,
    node::WorkflowNode,
    routing::{ForwardPipeline, RoutingPolicy},
    topology::Topology,
};
