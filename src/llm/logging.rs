// src/llm/logging.rs
// Shared logging helpers to keep the two backend clients consistent

use tracing::info;

/// Log token usage reported by a backend.
pub fn log_usage(
    request_id: &str,
    backend: &str,
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
) {
    info!(
        request_id = %request_id,
        prompt_tokens = prompt_tokens,
        completion_tokens = completion_tokens,
        total_tokens = total_tokens,
        "{} usage stats", backend
    );
}

/// Log completion summary for a generation call.
pub fn log_completion(request_id: &str, backend: &str, duration_ms: u64, content_len: usize) {
    info!(
        request_id = %request_id,
        duration_ms = duration_ms,
        content_len = content_len,
        "{} generation complete", backend
    );
}
