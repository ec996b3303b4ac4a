//! Prometheus metrics collection for askllm
//!
//! Tracks completion requests by outcome and the latency of the outbound
//! provider call. Exposed via the `/metrics` endpoint in Prometheus text format.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;
use std::time::Duration;

/// Outcome of a `/ask` request, used as a metrics label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    /// Convert outcome to Prometheus label string
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Error => "error",
        }
    }
}

/// Metrics collector for askllm
#[derive(Clone)]
pub struct Metrics {
    pub registry: Arc<Registry>,
    requests_total: IntCounterVec,
    completion_duration: Histogram,
}

impl Metrics {
    /// Create a new Metrics instance with its own registry
    ///
    /// # Errors
    ///
    /// Returns an error if metric registration fails (e.g., duplicate names).
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "askllm_requests_total",
                "Total number of /ask requests by outcome",
            ),
            &["outcome"],
        )?;

        let completion_duration = Histogram::with_opts(
            HistogramOpts::new(
                "askllm_completion_duration_seconds",
                "Latency of the outbound chat-completion call",
            )
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(completion_duration.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            requests_total,
            completion_duration,
        })
    }

    /// Record one finished `/ask` request
    pub fn record_request(&self, outcome: Outcome, elapsed: Duration) {
        self.requests_total
            .with_label_values(&[outcome.as_str()])
            .inc();
        self.completion_duration.observe(elapsed.as_secs_f64());
    }

    /// Current count for an outcome
    pub fn requests_count(&self, outcome: Outcome) -> u64 {
        self.requests_total
            .with_label_values(&[outcome.as_str()])
            .get()
    }

    /// Encode all registered metrics in Prometheus text format
    pub fn gather(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
