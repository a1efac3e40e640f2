//! Task prompt construction for the six text operations.
//!
//! Templates are fixed; only the input text (and the tone, for rewrite) is
//! substituted.

pub fn summarize(text: &str) -> String {
    format!("Summarize the following text in 3–5 bullet points. Be concise and clear.\n\n{text}")
}

pub fn keywords(text: &str) -> String {
    format!(
        "Extract 5–10 key keywords from the text below.\n\
         Return ONLY a JSON array of strings. Example: [\"keyword1\",\"keyword2\"].\n\n\
         Text:\n{text}"
    )
}

pub fn rewrite(text: &str, tone: &str) -> String {
    format!(
        "Rewrite the following text in a {tone} tone. Preserve the original meaning. \
         Respond with ONLY the rewritten text.\n\n{text}"
    )
}

pub fn questions(text: &str) -> String {
    format!(
        "From the text below, generate 5–10 clear, helpful questions.\n\
         Return ONLY a JSON array of strings. Example: [\"Question 1?\", \"Question 2?\"].\n\n\
         Text:\n{text}"
    )
}

pub fn titles(text: &str) -> String {
    format!(
        "Generate 5 concise, engaging title ideas for the text below.\n\
         Return ONLY a JSON array of strings. Example: [\"Title 1\", \"Title 2\"].\n\n\
         Text:\n{text}"
    )
}

pub fn expand(text: &str) -> String {
    format!(
        "Expand and elaborate on the following text.\n\
         Add helpful explanations and details but keep it clear and readable.\n\
         Respond with ONLY the expanded text.\n\n\
         Text:\n{text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_input() {
        let input = "The sky is blue.";
        for prompt in [
            summarize(input),
            keywords(input),
            rewrite(input, "neutral"),
            questions(input),
            titles(input),
            expand(input),
        ] {
            assert!(prompt.ends_with(input));
        }
    }

    #[test]
    fn test_rewrite_embeds_tone() {
        let prompt = rewrite("hello", "formal");
        assert!(prompt.contains("in a formal tone"));
    }

    #[test]
    fn test_list_prompts_request_json_arrays() {
        for prompt in [keywords("x"), questions("x"), titles("x")] {
            assert!(prompt.contains("Return ONLY a JSON array of strings."));
        }
    }
}
