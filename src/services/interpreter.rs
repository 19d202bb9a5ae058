// src/services/interpreter.rs
use serde_json::Value;
use thiserror::Error;

const EXCERPT_CHARS: usize = 120;

/// The model's reply was not a JSON document.
#[derive(Debug, Error)]
#[error("model output is not valid JSON ({source}); starts with {excerpt:?}")]
pub struct MalformedModelOutput {
    source: serde_json::Error,
    excerpt: String,
}

impl MalformedModelOutput {
    /// Leading characters of the rejected reply.
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }
}

/// Strictly parse the raw model text.
///
/// The whole text must be one JSON document. Prose around it, markdown code
/// fences and truncated output are all rejected rather than repaired.
pub fn interpret(reply: &str) -> Result<Value, MalformedModelOutput> {
    serde_json::from_str(reply).map_err(|source| MalformedModelOutput {
        source,
        excerpt: reply.chars().take(EXCERPT_CHARS).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_object() {
        let v = interpret(r#"{"question": "What is 2+2?", "options": [3, 4]}"#).unwrap();
        assert_eq!(v, json!({"question": "What is 2+2?", "options": [3, 4]}));
    }

    #[test]
    fn accepts_surrounding_whitespace_and_other_json_values() {
        assert_eq!(interpret("  {\"a\": 1}\n").unwrap(), json!({"a": 1}));
        assert_eq!(interpret("[1, 2]").unwrap(), json!([1, 2]));
        assert_eq!(interpret("\"plain\"").unwrap(), json!("plain"));
    }

    #[test]
    fn rejects_prose() {
        assert!(interpret("not json").is_err());
        assert!(interpret("Sure! Here is your JSON: {\"a\": 1}").is_err());
    }

    #[test]
    fn rejects_markdown_fence() {
        let fenced = "```json\n{\"a\": 1}\n```";
        let err = interpret(fenced).unwrap_err();
        assert!(err.excerpt().starts_with("```json"));
    }

    #[test]
    fn rejects_truncated_and_empty() {
        assert!(interpret(r#"{"question": "What is"#).is_err());
        assert!(interpret("").is_err());
        assert!(interpret(r#"{"a": 1} trailing"#).is_err());
    }

    #[test]
    fn excerpt_is_bounded() {
        let long = "x".repeat(1000);
        let err = interpret(&long).unwrap_err();
        assert_eq!(err.excerpt().chars().count(), EXCERPT_CHARS);
    }
}
