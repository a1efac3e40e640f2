//! Request and response bodies for the HTTP endpoints.

use serde::{Deserialize, Serialize};

/// Body for endpoints that take bare text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

/// Body for the rewrite endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tone: Option<String>,
}

impl RewriteRequest {
    /// Requested tone, defaulting to "neutral" when absent or empty
    pub fn tone_or_default(&self) -> &str {
        match self.tone.as_deref() {
            Some(tone) if !tone.is_empty() => tone,
            _ => "neutral",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

/// Shared by the rewrite and expand endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
}

/// JSON error body returned for 400 and 500 responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
