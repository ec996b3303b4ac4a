//! HTTP request handlers for the askllm API

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::llm::{CompletionClient, OpenAiClient};
use crate::metrics::Metrics;
use crate::middleware::request_id_middleware;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod ask;
pub mod health;
pub mod metrics;

/// Application state shared across all handlers
///
/// Holds the single completion client for the process. All fields are Arc'd
/// for cheap cloning across Axum handlers.
#[derive(Clone)]
pub struct AppState {
    client: Arc<dyn CompletionClient>,
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Create state around an already-built completion client
    pub fn new(client: Arc<dyn CompletionClient>) -> AppResult<Self> {
        let metrics = Metrics::new()
            .map_err(|e| AppError::Internal(format!("Failed to initialize metrics: {}", e)))?;

        Ok(Self {
            client,
            metrics: Arc::new(metrics),
        })
    }

    /// Build the OpenAI-compatible client described by `config` and wrap it
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = OpenAiClient::from_config(&config.llm)?;
        Self::new(Arc::new(client))
    }

    /// Get reference to the completion client
    pub fn client(&self) -> &dyn CompletionClient {
        self.client.as_ref()
    }

    /// Get reference to the metrics collector
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask::handler))
        .route("/health", get(health::handler))
        .route("/metrics", get(metrics::handler))
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}
