use serde::Serialize;

use crate::chat::ChatMessage;

/// Chat completion request
///
/// Serializes to the OpenAI wire format. Message order is preserved and
/// meaningful.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Create a new chat request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
        }
    }

    /// Add a message to the request
    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Add multiple messages
    pub fn with_messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.messages.extend(messages);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new("gpt-4o-mini")
            .with_message(ChatMessage::system("Be helpful"))
            .with_message(ChatMessage::user("Hello"));

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 2);
    }

    #[test]
    fn test_wire_format() {
        let request = ChatRequest::new("gpt-4o-mini")
            .with_message(ChatMessage::system("Be helpful"))
            .with_message(ChatMessage::user("Hello"));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": "Be helpful" },
                    { "role": "user", "content": "Hello" },
                ],
            })
        );
    }
}
