//! OpenAI-compatible chat-completion client
//!
//! One instance is built at startup and shared for the life of the process.

use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use super::{CompletionClient, prompt_len};
use crate::config::LlmConfig;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Instant;

const COMPLETIONS_PATH: &str = "/chat/completions";

/// HTTP client for `POST {base_url}/chat/completions`
///
/// No timeout, retry or fallback is configured: every failure is returned
/// as-is to the caller.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    url: String,
    model: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client for `base_url` using an explicit API key
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl AsRef<str>,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        let url = format!(
            "{}{}",
            base_url.as_ref().trim_end_matches('/'),
            COMPLETIONS_PATH
        );

        Ok(Self {
            http,
            url,
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Create a client from configuration, reading the key from the environment
    ///
    /// A missing or empty key is not an error here. The client is built with
    /// an empty key and the provider rejects the first request instead.
    pub fn from_config(config: &LlmConfig) -> AppResult<Self> {
        let api_key = std::env::var(config.api_key_env()).unwrap_or_default();
        let client = Self::new(api_key, config.model(), config.base_url())?;
        if !client.has_api_key() {
            tracing::warn!(
                env_var = config.api_key_env(),
                "API key environment variable is unset or empty; requests will fail authentication"
            );
        }
        Ok(client)
    }

    /// Full completions URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether a non-empty key was configured
    ///
    /// Without one, requests are sent with no `Authorization` header.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn ask(&self, prompt: Option<&Value>) -> AppResult<Option<String>> {
        let request = ChatCompletionRequest::single_user_message(&self.model, prompt);
        let started = Instant::now();

        tracing::debug!(
            model = %self.model,
            url = %self.url,
            prompt_present = prompt.is_some(),
            prompt_chars = prompt_len(prompt),
            "Sending chat completion request"
        );

        let mut builder = self.http.post(&self.url).json(&request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder.send().await.map_err(|e| AppError::Upstream {
            endpoint: self.url.clone(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(text) => text,
                Err(e) => format!("<failed to read response body: {}>", e),
            };
            tracing::warn!(
                model = %self.model,
                status = %status,
                "Completion provider returned non-success status"
            );
            return Err(AppError::UpstreamStatus {
                endpoint: self.url.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| AppError::InvalidResponse {
                    endpoint: self.url.clone(),
                    reason: e.to_string(),
                })?;

        let choice_count = completion.choices.len();
        let content = completion
            .into_first_content()
            .ok_or_else(|| AppError::EmptyChoices {
                endpoint: self.url.clone(),
            })?;

        tracing::debug!(
            model = %self.model,
            choice_count,
            content_present = content.is_some(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Chat completion received"
        );

        Ok(content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
