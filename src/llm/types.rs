//! Wire types for the chat-completion API
//!
//! Only the fields this service sends or reads are modelled. Everything else
//! in the provider's response (ids, usage, finish reasons) is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of the single message sent with every request
pub const USER_ROLE: &str = "user";

/// Non-streaming chat-completion request body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Build a request carrying one user message with `prompt` as its content
    ///
    /// An absent prompt produces a message without a `content` field.
    pub fn single_user_message(model: &'a str, prompt: Option<&'a Value>) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: USER_ROLE,
                content: prompt,
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a Value>,
}

/// Chat-completion response body
///
/// `choices` is required: a body without it is a malformed response, not an
/// empty one.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, untouched
    ///
    /// Returns `None` when there are no choices. The inner `Option` is the
    /// choice's own content, which providers may send as `null`.
    pub fn into_first_content(self) -> Option<Option<String>> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
    }
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_single_user_message() {
        let prompt = json!("hello");
        let request = ChatCompletionRequest::single_user_message("gpt-4.1-mini", Some(&prompt));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-4.1-mini",
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }

    #[test]
    fn test_request_omits_content_for_absent_prompt() {
        let request = ChatCompletionRequest::single_user_message("m", None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"model": "m", "messages": [{"role": "user"}]}));
    }

    #[test]
    fn test_request_forwards_non_string_prompt_verbatim() {
        let prompt = json!({"nested": [1, 2]});
        let request = ChatCompletionRequest::single_user_message("m", Some(&prompt));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["content"], json!({"nested": [1, 2]}));
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "usage": {"total_tokens": 3},
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"}
            ]
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_first_content(), Some(Some("first".to_string())));
    }

    #[test]
    fn test_response_with_no_choices() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(response.into_first_content(), None);
    }

    #[test]
    fn test_response_with_null_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_first_content(), Some(None));
    }

    #[test]
    fn test_response_without_choices_key_is_rejected() {
        let result = serde_json::from_str::<ChatCompletionResponse>(r#"{"error": "nope"}"#);
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn first_content_is_byte_identical(content in any::<String>()) {
            let body = json!({
                "choices": [{"message": {"role": "assistant", "content": content.clone()}}]
            })
            .to_string();
            let response: ChatCompletionResponse = serde_json::from_str(&body).unwrap();
            prop_assert_eq!(response.into_first_content(), Some(Some(content)));
        }
    }
}
