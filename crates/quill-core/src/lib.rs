pub mod api;
pub mod chat;
pub mod prompt;
pub mod reply;

pub use api::{
    ErrorResponse, KeywordsResponse, QuestionsResponse, RewriteRequest, RewriteResponse,
    SummarizeResponse, TextRequest, TitlesResponse,
};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, Choice, Role};
pub use reply::ListReply;
