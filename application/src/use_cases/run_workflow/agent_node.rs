//! Agent node: one model turn for one role.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use pecko_domain::{AiMessage, ConversationLog, Message, RoleDefinition, ToolDefinition};
use tracing::debug;

/// Ask the role's model for its next message.
///
/// The role's system prompt is prepended on every call and never stored in
/// the log, so a role's identity cannot drift between turns. The returned
/// message is stamped with the role as its author; appending is up to the
/// caller.
pub(super) async fn invoke<G: LlmGateway + ?Sized>(
    gateway: &G,
    role: &RoleDefinition,
    tools: &[ToolDefinition],
    log: &ConversationLog,
) -> Result<AiMessage, GatewayError> {
    let mut messages = Vec::with_capacity(log.len() + 1);
    messages.push(Message::system(role.system_prompt()));
    messages.extend(log.messages().iter().cloned());

    debug!(
        "Invoking {} on {} ({} messages, {} tools)",
        role.name(),
        role.model(),
        messages.len(),
        tools.len()
    );

    let response = gateway.complete(role.model(), &messages, tools).await?;
    Ok(response.with_author(role.kind()))
}
