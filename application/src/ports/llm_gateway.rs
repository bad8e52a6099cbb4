//! LLM Gateway port
//!
//! Defines the interface for communicating with the model backend.

use async_trait::async_trait;
use pecko_domain::{AiMessage, Message, Model, ToolDefinition};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// One call per agent turn: the full message history (system prompt first)
/// plus the tools the role may call. Implementations live in the
/// infrastructure layer; tests use a scripted double.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn complete(
        &self,
        model: &Model,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<AiMessage, GatewayError>;
}
