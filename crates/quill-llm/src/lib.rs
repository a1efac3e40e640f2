pub mod client;
pub mod error;
pub mod provider;

pub use client::OpenAiClient;
pub use error::{CompletionError, Result};
pub use provider::CompletionProvider;
