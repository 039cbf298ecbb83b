//! OpenAI-compatible chat completions client.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use super::{CompletionGateway, CompletionRequest};
use crate::error::{RelayError, Result};

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Gateway backed by `POST {api_base}/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAiGateway {
    client: Client,
    api_key: String,
    api_base: String,
}

impl OpenAiGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Points the gateway at another compatible endpoint.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn generate(&self, request: &CompletionRequest) -> Result<String> {
        debug!(
            "Requesting completion from {} ({} messages, max_tokens {})",
            request.model,
            request.messages.len(),
            request.max_tokens
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::provider(format!("API returned {status}: {body}"))
                .with_status(status.as_u16()));
        }

        let raw: Value = response.json().await?;
        extract_content(&raw)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// Pulls `choices[0].message.content` out of a completion response.
fn extract_content(raw: &Value) -> Result<String> {
    raw["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.trim().to_string())
        .ok_or_else(|| RelayError::provider("No message content in completion response").build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_content() {
        let raw = json!({
            "choices": [{"message": {"role": "assistant", "content": "  Hello!\n"}}]
        });
        assert_eq!(extract_content(&raw).unwrap(), "Hello!");
    }

    #[test]
    fn test_extract_content_missing() {
        let err = extract_content(&json!({"choices": []})).unwrap_err();
        assert!(err.is_provider());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let gateway = OpenAiGateway::new("key").with_api_base("http://localhost:8080/v1/");
        assert_eq!(gateway.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![crate::models::ChatMessage::user("hi")],
            max_tokens: 500,
            temperature: 0.5,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["temperature"], 0.5);
    }
}
