// src/services/prompt.rs
//! Flattens a transcript into the single text value the model accepts.
//!
//! The encoding is the transcript's JSON record array, so author and
//! content boundaries survive even when content itself contains quotes,
//! newlines or nested objects.

use thiserror::Error;

use super::transcript::Transcript;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("transcript does not start with the manual turn")]
    Unseeded,
    #[error("failed to encode transcript: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub fn render(transcript: &Transcript) -> Result<String, PromptError> {
    if !transcript.is_seeded() {
        return Err(PromptError::Unseeded);
    }
    Ok(transcript.to_json()?)
}

/// Inverse of [`render`].
pub fn parse(text: &str) -> Result<Transcript, PromptError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transcript::Author;
    use serde_json::json;

    #[test]
    fn round_trip_preserves_sequence() {
        let mut t = Transcript::new();
        t.append(Author::Admin, "Reply with one JSON object.\n\"Quotes\" stay intact.");
        t.append(Author::User, json!({"answer": "B", "meta": {"n": [1, 2]}}));
        t.append(Author::Assistant, json!({"question": "next?", "score": 1.5}));

        let text = render(&t).unwrap();
        let back = parse(&text).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn render_requires_manual_first() {
        let mut t = Transcript::new();
        assert!(matches!(render(&t), Err(PromptError::Unseeded)));

        t.append(Author::User, json!({"answer": 1}));
        assert!(matches!(render(&t), Err(PromptError::Unseeded)));
    }

    #[test]
    fn parse_rejects_unknown_author() {
        let err = parse(r#"[{"author":"system","content":"x"}]"#).unwrap_err();
        assert!(matches!(err, PromptError::Encoding(_)));
    }
}
