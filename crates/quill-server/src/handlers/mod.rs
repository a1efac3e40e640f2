pub mod text_api;

pub use text_api::{expand, keywords, questions, rewrite, summarize, titles};
