use async_trait::async_trait;

use crate::error::Result;

/// Seam between the HTTP handlers and the concrete completion backend.
///
/// Handlers hold an `Arc<dyn CompletionProvider>`; tests substitute a mock.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a single prompt and return the model's textual reply
    async fn complete(&self, prompt: &str) -> Result<String>;
}
