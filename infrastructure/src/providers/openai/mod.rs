//! OpenAI-compatible chat completions backend
//!
//! Works against any endpoint that speaks `/chat/completions` with function
//! tools (OpenAI, Azure-style proxies, Ollama, vLLM, LM Studio).

mod types;

use crate::config::ResolvedProfile;
use crate::tools::JsonSchemaToolConverter;
use async_trait::async_trait;
use pecko_application::{GatewayError, LlmGateway, ToolSchemaPort};
use pecko_domain::{AiMessage, Message, Model, ToolDefinition};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};
use types::{ChatRequest, ChatResponse, from_chat_response, status_error, to_wire_message};

/// Deterministic decoding for every role
const TEMPERATURE: f32 = 0.0;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// [`LlmGateway`] over an OpenAI-compatible HTTP API.
pub struct OpenAiGateway {
    http: Client,
    base_url: String,
    api_key: String,
    schema: Arc<dyn ToolSchemaPort>,
}

impl OpenAiGateway {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            schema: Arc::new(JsonSchemaToolConverter),
        }
    }

    pub fn from_profile(profile: &ResolvedProfile) -> Self {
        Self::new(&profile.base_url, &profile.api_key)
    }

    pub fn with_schema(mut self, schema: Arc<dyn ToolSchemaPort>) -> Self {
        self.schema = schema;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(
        &self,
        model: &Model,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<AiMessage, GatewayError> {
        let request = ChatRequest {
            model: model.as_str(),
            messages: messages.iter().map(to_wire_message).collect(),
            tools: self.schema.tools_schema(tools),
            temperature: TEMPERATURE,
        };
        debug!(
            model = %model,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "chat completion request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(status_error(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(transport_error)?;
        trace!(body = %body, "chat completion response");
        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(format!("failed to parse response: {e}")))?;

        from_chat_response(parsed)
    }
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_connect() || err.is_timeout() {
        GatewayError::ConnectionError(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let gateway = OpenAiGateway::new("http://localhost:11434/v1/", "k");
        assert_eq!(gateway.base_url(), "http://localhost:11434/v1");
        assert_eq!(gateway.endpoint(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_request_body() {
        let tools = vec![crate::tools::file::read_file_definition()];
        let schema = JsonSchemaToolConverter;
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![to_wire_message(&Message::human("hi"))],
            tools: schema.tools_schema(&tools),
            temperature: TEMPERATURE,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["tools"][0]["function"]["name"], "read_file");
    }

    #[test]
    fn test_request_without_tools_omits_key() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: Vec::new(),
            tools: Vec::new(),
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tools").is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_connection_error() {
        // port 9 (discard) is closed on test machines
        let gateway = OpenAiGateway::new("http://127.0.0.1:9/v1", "k");
        let err = gateway
            .complete(&Model::default(), &[Message::human("hi")], &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)), "{err:?}");
    }
}
