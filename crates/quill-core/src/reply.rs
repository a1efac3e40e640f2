//! Shaping of model replies for the list-returning endpoints.

/// Outcome of interpreting a reply that was asked to be a JSON array.
///
/// The upstream model is not guaranteed to honor the "return only JSON"
/// instruction, so a reply that does not parse is kept verbatim instead of
/// being treated as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListReply {
    Parsed(Vec<String>),
    Fallback(String),
}

impl ListReply {
    /// Interpret a raw model reply as a JSON array of strings
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(items) => ListReply::Parsed(items),
            Err(_) => ListReply::Fallback(raw),
        }
    }

    /// Flatten into the response list: the parsed items, or one element
    /// holding the raw reply
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ListReply::Parsed(items) => items,
            ListReply::Fallback(raw) => vec![raw],
        }
    }
}
