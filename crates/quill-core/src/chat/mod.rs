pub mod message;
pub mod request;
pub mod response;

pub use message::{ChatMessage, Role};
pub use request::ChatRequest;
pub use response::{ChatResponse, Choice};
