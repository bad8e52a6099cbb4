//! Conversation entities

use crate::role::RoleKind;
use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};

/// Tag of a [`Message`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    Human,
    Ai,
    ToolResult,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::Human => "human",
            MessageRole::Ai => "ai",
            MessageRole::ToolResult => "tool_result",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A model turn: text plus zero or more tool calls, in the order issued
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiMessage {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    /// Role that produced the turn; stamped by the agent node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<RoleKind>,
}

impl AiMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
            author: None,
        }
    }

    pub fn with_tool_call(mut self, call: ToolCall) -> Self {
        self.tool_calls.push(call);
        self
    }

    pub fn with_author(mut self, author: RoleKind) -> Self {
        self.author = Some(author);
        self
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Output of one tool call, pointing back at the call that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultMessage {
    pub call_id: String,
    pub tool_name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    System { content: String },
    Human { content: String },
    Ai(AiMessage),
    ToolResult(ToolResultMessage),
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message::System {
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Message::Human {
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Message::Ai(AiMessage::new(content))
    }

    pub fn tool_result(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Message::ToolResult(ToolResultMessage {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            content: content.into(),
            is_error: false,
        })
    }

    pub fn role_tag(&self) -> MessageRole {
        match self {
            Message::System { .. } => MessageRole::System,
            Message::Human { .. } => MessageRole::Human,
            Message::Ai(_) => MessageRole::Ai,
            Message::ToolResult(_) => MessageRole::ToolResult,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Message::System { content } | Message::Human { content } => content,
            Message::Ai(ai) => &ai.content,
            Message::ToolResult(result) => &result.content,
        }
    }

    pub fn as_ai(&self) -> Option<&AiMessage> {
        match self {
            Message::Ai(ai) => Some(ai),
            _ => None,
        }
    }

    pub fn as_tool_result(&self) -> Option<&ToolResultMessage> {
        match self {
            Message::ToolResult(result) => Some(result),
            _ => None,
        }
    }
}

impl From<AiMessage> for Message {
    fn from(ai: AiMessage) -> Self {
        Message::Ai(ai)
    }
}

impl From<ToolResultMessage> for Message {
    fn from(result: ToolResultMessage) -> Self {
        Message::ToolResult(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tags() {
        assert_eq!(Message::system("s").role_tag(), MessageRole::System);
        assert_eq!(Message::human("h").role_tag(), MessageRole::Human);
        assert_eq!(Message::ai("a").role_tag(), MessageRole::Ai);
        assert_eq!(
            Message::tool_result("c1", "read_file", "x").role_tag(),
            MessageRole::ToolResult
        );
    }

    #[test]
    fn test_ai_message_tool_calls() {
        let ai = AiMessage::new("")
            .with_tool_call(ToolCall::new("c1", "list_files"))
            .with_author(RoleKind::Planner);

        assert!(ai.has_tool_calls());
        assert_eq!(ai.author, Some(RoleKind::Planner));
        assert!(!AiMessage::new("done").has_tool_calls());
    }

    #[test]
    fn test_message_serializes_with_role_tag() {
        let msg = Message::tool_result("call_9", "write_file", "Successfully wrote to a.txt");
        let value = serde_json::to_value(&msg).unwrap();

        assert_eq!(value["role"], "tool_result");
        assert_eq!(value["call_id"], "call_9");
        assert!(value.get("is_error").is_none());

        let back: Message = serde_json::from_value(value).unwrap();
        assert_eq!(back, msg);
    }
}
