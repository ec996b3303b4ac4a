//! Ask endpoint handler
//!
//! Handles POST /ask: forwards the body's `query` field to the completion
//! client and replies with `{"response": <content>}`.
//!
//! The body is read leniently and the `query` field is not validated. Whatever
//! is there (or nothing, including no body at all) is passed straight through,
//! and provider failures are returned to the framework as `AppError` without
//! local handling.

use crate::error::AppResult;
use crate::handlers::AppState;
use crate::metrics::Outcome;
use crate::middleware::RequestId;
use axum::{Extension, Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Reply body for `/ask`
///
/// `response` is serialized as `null` when the provider's first choice had
/// no content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: Option<String>,
}

/// Extract the `query` field from an arbitrary JSON body
///
/// Absent (or a non-object body) yields `None`; an explicit `null` is kept.
pub fn query_field(body: &Value) -> Option<&Value> {
    body.get("query")
}

/// Parse a request body as JSON regardless of its content type
///
/// An empty or unparseable body becomes `Value::Null`, which has no `query`.
pub fn lenient_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}

/// POST /ask handler
pub async fn handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> AppResult<Json<AskResponse>> {
    let body = lenient_body(&body);
    let prompt = query_field(&body);

    tracing::debug!(
        request_id = %request_id,
        model = state.client().model(),
        query_present = prompt.is_some(),
        "Forwarding query to completion client"
    );

    let started = Instant::now();
    let result = state.client().ask(prompt).await;
    let elapsed = started.elapsed();

    match result {
        Ok(response) => {
            state.metrics().record_request(Outcome::Success, elapsed);
            tracing::info!(
                request_id = %request_id,
                elapsed_ms = elapsed.as_millis() as u64,
                "Completion returned"
            );
            Ok(Json(AskResponse { response }))
        }
        Err(e) => {
            state.metrics().record_request(Outcome::Error, elapsed);
            tracing::error!(
                request_id = %request_id,
                error = %e,
                elapsed_ms = elapsed.as_millis() as u64,
                "Completion failed"
            );
            Err(e)
        }
    }
}
