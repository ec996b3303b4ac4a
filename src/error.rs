//! Error types for askllm
//!
//! All errors implement `IntoResponse` for Axum handlers. Handlers never build
//! error bodies themselves; they return `AppError` and let this mapping decide
//! the status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration in {path}: {reason}")]
    ConfigValidationFailed { path: String, reason: String },

    #[error("Request to {endpoint} failed: {reason}")]
    Upstream { endpoint: String, reason: String },

    #[error("{endpoint} returned {status}: {body}")]
    UpstreamStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    #[error("Response from {endpoint} contained no choices")]
    EmptyChoices { endpoint: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the failure originated at the completion provider
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. }
                | Self::UpstreamStatus { .. }
                | Self::InvalidResponse { .. }
                | Self::EmptyChoices { .. }
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_creates() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_upstream_status_message_includes_body() {
        let err = AppError::UpstreamStatus {
            endpoint: "http://localhost/v1/chat/completions".to_string(),
            status: 401,
            body: "invalid api key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "http://localhost/v1/chat/completions returned 401: invalid api key"
        );
    }

    #[test]
    fn test_empty_choices_message() {
        let err = AppError::EmptyChoices {
            endpoint: "mock".to_string(),
        };
        assert_eq!(err.to_string(), "Response from mock contained no choices");
    }

    #[test]
    fn test_upstream_errors_map_to_bad_gateway() {
        let errors = vec![
            AppError::Upstream {
                endpoint: "mock".to_string(),
                reason: "connection refused".to_string(),
            },
            AppError::UpstreamStatus {
                endpoint: "mock".to_string(),
                status: 500,
                body: String::new(),
            },
            AppError::InvalidResponse {
                endpoint: "mock".to_string(),
                reason: "expected value".to_string(),
            },
            AppError::EmptyChoices {
                endpoint: "mock".to_string(),
            },
        ];

        for err in errors {
            assert!(err.is_upstream(), "{:?} should be upstream", err);
            assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn test_config_error_response_status() {
        let err = AppError::Config("test".to_string());
        assert!(!err.is_upstream());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_response_status() {
        let err = AppError::Internal("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_is_json_with_error_key() {
        let err = AppError::EmptyChoices {
            endpoint: "mock".to_string(),
        };
        let response = err.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Response from mock contained no choices");
    }
}
