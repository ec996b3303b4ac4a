//! Completion payload benchmarks
//!
//! Measures the non-I/O work done per `/ask` call: serializing the outbound
//! request and extracting the first choice from the provider's reply.
//!
//! Run with: `cargo bench`

use askllm::llm::types::{ChatCompletionRequest, ChatCompletionResponse};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

fn bench_request_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_serialization");

    for size in [16usize, 1_024, 65_536] {
        let prompt = Value::String("a".repeat(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &prompt, |b, prompt| {
            b.iter(|| {
                let request =
                    ChatCompletionRequest::single_user_message("gpt-4.1-mini", Some(black_box(prompt)));
                serde_json::to_vec(&request)
            })
        });
    }

    group.finish();
}

fn bench_response_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_extraction");

    for size in [16usize, 1_024, 65_536] {
        let body = json!({
            "id": "chatcmpl-bench",
            "object": "chat.completion",
            "usage": {"prompt_tokens": 10, "completion_tokens": size, "total_tokens": size + 10},
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "b".repeat(size)}, "finish_reason": "stop"}
            ]
        })
        .to_string();

        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| {
                let response: ChatCompletionResponse =
                    serde_json::from_str(black_box(body)).expect("valid body");
                response.into_first_content()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_request_serialization, bench_response_extraction);
criterion_main!(benches);
