//! Conversation domain
//!
//! Messages exchanged during a run and the append-only [`log::ConversationLog`]
//! shared by every role of that run.

pub mod entities;
pub mod log;

pub use entities::{AiMessage, Message, MessageRole, ToolResultMessage};
pub use log::ConversationLog;
