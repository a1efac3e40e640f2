use std::sync::Arc;

use quill_llm::CompletionProvider;

/// 应用状态 - 在 main.rs 中创建并共享给所有 handlers
///
/// Read-only after startup; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Outbound completion backend
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}
