use thiserror::Error;

/// Unified error type for outbound completion calls
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("upstream error: status={status} body={body}")]
    Upstream { status: u16, body: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("no choices in completion response")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CompletionError>;
