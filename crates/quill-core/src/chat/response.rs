use serde::Deserialize;

use crate::chat::ChatMessage;

/// Chat completion response
///
/// Only the fields this service consumes are modeled; everything else the
/// upstream API returns is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice wrapping a single message
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

impl ChatResponse {
    /// Text content of the first choice, if any
    pub fn first_text(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}
