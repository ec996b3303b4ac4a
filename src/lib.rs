//! askllm - forward a prompt to a hosted chat-completion API
//!
//! A single `POST /ask` endpoint takes `{"query": ...}`, sends it as the only
//! user message to an OpenAI-compatible provider and replies with
//! `{"response": <first choice content>}`.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod metrics;
pub mod middleware;
pub mod telemetry;
