//! Append-only conversation log

use super::entities::{AiMessage, Message};
use crate::core::error::DomainError;
use std::sync::Arc;

/// Ordered message history of one run.
///
/// Backed by an `Arc<Vec<Message>>`: [`snapshot`](Self::snapshot) is a
/// reference-count bump, and [`append`](Self::append) copies the buffer only
/// when a snapshot is still alive. A snapshot therefore never observes
/// messages appended after it was taken.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationLog {
    messages: Arc<Vec<Message>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log holding a single human message
    pub fn seeded(prompt: impl Into<String>) -> Self {
        let mut log = Self::new();
        log.append(Message::human(prompt));
        log
    }

    pub fn append(&mut self, message: impl Into<Message>) {
        Arc::make_mut(&mut self.messages).push(message.into());
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        Arc::make_mut(&mut self.messages).extend(messages);
    }

    /// Immutable view of the log as it is now
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn last_ai(&self) -> Option<&AiMessage> {
        self.messages.iter().rev().find_map(Message::as_ai)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Check that tool results pair up with the calls of the AI message
    /// right before them, contiguously and in call order.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut pending: &[crate::tool::entities::ToolCall] = &[];

        for (idx, message) in self.messages.iter().enumerate() {
            match message {
                Message::ToolResult(result) => {
                    let Some((expected, rest)) = pending.split_first() else {
                        return Err(DomainError::ConversationInvariant(format!(
                            "message {idx}: tool result '{}' has no matching call",
                            result.call_id
                        )));
                    };
                    if expected.call_id != result.call_id {
                        return Err(DomainError::ConversationInvariant(format!(
                            "message {idx}: expected result for '{}', found '{}'",
                            expected.call_id, result.call_id
                        )));
                    }
                    pending = rest;
                }
                other => {
                    if let Some(expected) = pending.first() {
                        return Err(DomainError::ConversationInvariant(format!(
                            "message {idx}: call '{}' has no result",
                            expected.call_id
                        )));
                    }
                    if let Message::Ai(ai) = other {
                        pending = &ai.tool_calls;
                    }
                }
            }
        }

        Ok(())
    }
}

impl From<Vec<Message>> for ConversationLog {
    fn from(messages: Vec<Message>) -> Self {
        Self {
            messages: Arc::new(messages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolCall;

    fn ai_with_calls(ids: &[&str]) -> AiMessage {
        ids.iter().fold(AiMessage::new(""), |ai, id| {
            ai.with_tool_call(ToolCall::new(*id, "read_file"))
        })
    }

    #[test]
    fn test_seeded() {
        let log = ConversationLog::seeded("hi");
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0], Message::human("hi"));
        assert!(log.last_ai().is_none());
    }

    #[test]
    fn test_snapshot_does_not_observe_later_appends() {
        let mut log = ConversationLog::seeded("task");
        let snap = log.snapshot();

        log.append(Message::ai("working"));

        assert_eq!(snap.len(), 1);
        assert_eq!(log.len(), 2);
        assert_eq!(log.last_ai().map(|ai| ai.content.as_str()), Some("working"));
    }

    #[test]
    fn test_validate_accepts_paired_results() {
        let mut log = ConversationLog::seeded("task");
        log.append(ai_with_calls(&["a", "b"]));
        log.append(Message::tool_result("a", "read_file", "1"));
        log.append(Message::tool_result("b", "read_file", "2"));
        log.append(Message::ai("done"));

        assert!(log.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_order_results() {
        let mut log = ConversationLog::seeded("task");
        log.append(ai_with_calls(&["a", "b"]));
        log.append(Message::tool_result("b", "read_file", "2"));
        log.append(Message::tool_result("a", "read_file", "1"));

        assert!(matches!(
            log.validate(),
            Err(DomainError::ConversationInvariant(_))
        ));
    }

    #[test]
    fn test_validate_rejects_orphan_and_missing_results() {
        let orphan = ConversationLog::from(vec![
            Message::human("task"),
            Message::tool_result("x", "list_files", "[FILE] a"),
        ]);
        assert!(orphan.validate().is_err());

        let mut missing = ConversationLog::seeded("task");
        missing.append(ai_with_calls(&["a"]));
        missing.append(Message::ai("moved on"));
        assert!(missing.validate().is_err());
    }
}
