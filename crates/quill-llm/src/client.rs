use async_trait::async_trait;
use reqwest::Client;

use quill_core::chat::{ChatMessage, ChatRequest, ChatResponse};

use crate::error::{CompletionError, Result};
use crate::provider::CompletionProvider;

/// Default OpenAI API root; any compatible endpoint works
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// System message sent ahead of every task prompt
const SYSTEM_PROMPT: &str = "You are a helpful text-processing assistant.";

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Each call is a single attempt: no retry, no backoff, no timeout beyond
/// what the transport enforces, and no cancellation once the request is in
/// flight.
pub struct OpenAiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Create a new client with an API key and default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (Azure or other compatible APIs)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest::new(&self.model)
            .with_message(ChatMessage::system(SYSTEM_PROMPT))
            .with_message(ChatMessage::user(prompt))
    }

    async fn send_request(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))?;

        completion.first_text().ok_or(CompletionError::Empty)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        log::debug!("completion request: model={} url={}", self.model, self.base_url);
        let result = self.send_request(&self.build_request(prompt)).await;
        if let Err(e) = &result {
            log::debug!("completion request failed: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::chat::Role;

    fn mock_client(server: &mockito::ServerGuard) -> OpenAiClient {
        OpenAiClient::new("test-key").with_base_url(server.url())
    }

    #[test]
    fn test_build_request_shape() {
        let client = OpenAiClient::new("test-key").with_model("gpt-4o-mini");
        let request = client.build_request("Summarize this.");

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "Summarize this.");
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"- Sky is blue"}}]}"#,
            )
            .create_async()
            .await;

        let reply = mock_client(&server).complete("Summarize this.").await.unwrap();

        assert_eq!(reply, "- Sky is blue");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_surfaces_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body("invalid api key")
            .create_async()
            .await;

        let err = mock_client(&server).complete("hi").await.unwrap_err();

        match err {
            CompletionError::Upstream { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_body_surfaces_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let err = mock_client(&server).complete("hi").await.unwrap_err();
        assert!(matches!(err, CompletionError::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_surfaces_empty_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = mock_client(&server).complete("hi").await.unwrap_err();
        assert!(matches!(err, CompletionError::Empty));
    }
}
