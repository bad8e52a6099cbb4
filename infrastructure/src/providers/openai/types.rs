//! Wire types for the OpenAI-compatible chat completions API and their
//! conversions to and from domain messages.

use pecko_application::GatewayError;
use pecko_domain::{AiMessage, Message, ToolCall};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_kind")]
    pub kind: String,
    pub function: WireFunction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFunction {
    pub name: String,
    /// JSON-encoded argument object
    #[serde(default)]
    pub arguments: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: WireMessage,
}

fn function_kind() -> String {
    "function".to_string()
}

fn plain(role: &str, content: &str) -> WireMessage {
    WireMessage {
        role: role.to_string(),
        content: Some(content.to_string()),
        tool_calls: None,
        tool_call_id: None,
    }
}

// ─── Domain → Wire ───────────────────────────────────────────────

pub fn to_wire_message(message: &Message) -> WireMessage {
    match message {
        Message::System { content } => plain("system", content),
        Message::Human { content } => plain("user", content),
        Message::Ai(ai) => {
            let tool_calls = ai.has_tool_calls().then(|| {
                ai.tool_calls
                    .iter()
                    .map(|call| WireToolCall {
                        id: call.call_id.clone(),
                        kind: function_kind(),
                        function: WireFunction {
                            name: call.name.clone(),
                            arguments: Value::Object(call.arguments.clone()).to_string(),
                        },
                    })
                    .collect()
            });
            WireMessage {
                role: "assistant".to_string(),
                content: Some(ai.content.clone()),
                tool_calls,
                tool_call_id: None,
            }
        }
        Message::ToolResult(result) => WireMessage {
            role: "tool".to_string(),
            content: Some(result.content.clone()),
            tool_calls: None,
            tool_call_id: Some(result.call_id.clone()),
        },
    }
}

// ─── Wire → Domain ───────────────────────────────────────────────

/// Turn the first choice of a response into an [`AiMessage`].
pub fn from_chat_response(response: ChatResponse) -> Result<AiMessage, GatewayError> {
    let message = response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message)
        .ok_or_else(|| GatewayError::InvalidResponse("response has no choices".to_string()))?;

    let mut ai = AiMessage::new(message.content.unwrap_or_default());
    for call in message.tool_calls.unwrap_or_default() {
        ai = ai.with_tool_call(from_wire_tool_call(call)?);
    }
    Ok(ai)
}

fn from_wire_tool_call(call: WireToolCall) -> Result<ToolCall, GatewayError> {
    let arguments = if call.function.arguments.trim().is_empty() {
        serde_json::Map::new()
    } else {
        match serde_json::from_str::<Value>(&call.function.arguments) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(GatewayError::InvalidResponse(format!(
                    "arguments of tool call '{}' are not an object: {}",
                    call.id, other
                )));
            }
            Err(e) => {
                return Err(GatewayError::InvalidResponse(format!(
                    "arguments of tool call '{}' are not valid JSON: {}",
                    call.id, e
                )));
            }
        }
    };

    Ok(ToolCall {
        call_id: call.id,
        name: call.function.name,
        arguments,
    })
}

/// Map a non-success HTTP status to a gateway error
pub fn status_error(status: u16, body: &str) -> GatewayError {
    let detail = format!("HTTP {}: {}", status, body.trim());
    match status {
        401 | 403 => GatewayError::AuthenticationFailed(detail),
        429 => GatewayError::RateLimited(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}
