//! Prometheus metrics endpoint
//!
//! Exposes metrics in Prometheus text format for scraping.

use axum::{extract::State, http::StatusCode};

use crate::handlers::AppState;

/// Metrics handler for Prometheus scraping
///
/// # Response
///
/// - `200 OK` with metrics in Prometheus text format
/// - `500 Internal Server Error` if metrics collection fails
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/metrics
/// # HELP askllm_requests_total Total number of /ask requests by outcome
/// # TYPE askllm_requests_total counter
/// askllm_requests_total{outcome="success"} 42
/// ```
pub async fn handler(State(state): State<AppState>) -> (StatusCode, String) {
    match state.metrics().gather() {
        Ok(output) => (StatusCode::OK, output),
        Err(e) => {
            tracing::error!(error = %e, "Failed to gather metrics for Prometheus scraping");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to gather metrics: {}", e),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::metrics::Outcome;
    use std::time::Duration;

    #[tokio::test]
    async fn test_metrics_handler_returns_prometheus_format() {
        let config: Config = toml::from_str("").unwrap();
        let state = AppState::from_config(&config).unwrap();
        state
            .metrics()
            .record_request(Outcome::Success, Duration::from_millis(10));

        let (status, body) = handler(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("# TYPE askllm_requests_total counter"));
        assert!(body.contains("askllm_requests_total{outcome=\"success\"} 1"));
    }
}
