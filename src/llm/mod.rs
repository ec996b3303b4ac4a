//! Completion client abstraction
//!
//! Handlers talk to the provider through [`CompletionClient`] so the one
//! long-lived client is passed in explicitly via `AppState` and can be
//! replaced in tests.

use crate::error::AppResult;
use async_trait::async_trait;
use serde_json::Value;

pub mod openai;
pub mod types;

pub use openai::OpenAiClient;

/// A single-shot chat-completion backend
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as the only user message and return the first choice's content
    ///
    /// `None` for `prompt` means the caller supplied no prompt at all; the
    /// request is still sent. The returned content is exactly what the
    /// provider produced, or `None` if its first choice carried no content.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses, undecodable bodies and
    /// responses with zero choices are all returned to the caller.
    async fn ask(&self, prompt: Option<&Value>) -> AppResult<Option<String>>;

    /// Model identifier sent with each request
    fn model(&self) -> &str;
}

/// Character count of a prompt for logging, without logging its text
pub(crate) fn prompt_len(prompt: Option<&Value>) -> usize {
    match prompt {
        Some(Value::String(s)) => s.chars().count(),
        Some(other) => other.to_string().chars().count(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_len_counts_unicode_chars() {
        assert_eq!(prompt_len(Some(&json!("héllo"))), 5);
    }

    #[test]
    fn test_prompt_len_absent_is_zero() {
        assert_eq!(prompt_len(None), 0);
    }

    #[test]
    fn test_prompt_len_non_string_uses_json_text() {
        assert_eq!(prompt_len(Some(&json!(42))), 2);
    }
}
