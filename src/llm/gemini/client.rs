// src/llm/gemini/client.rs
// Gemini generateContent client (non-streaming)

use crate::error::Result;
use crate::llm::gemini::types::{GeminiPart, GeminiRequest, GeminiResponse};
use crate::llm::http_client::LlmHttpClient;
use crate::llm::logging;
use crate::llm::provider::{Backend, BackendClient};
use crate::request::GenerationRequest;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Gemini generateContent API.
/// Constructed per call around the shared HTTP client.
pub struct GeminiClient<'a> {
    http: &'a LlmHttpClient,
    api_base: String,
}

impl<'a> GeminiClient<'a> {
    pub fn new(http: &'a LlmHttpClient) -> Self {
        Self {
            http,
            api_base: GEMINI_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API base (tests, proxies).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

#[async_trait]
impl BackendClient for GeminiClient<'_> {
    fn backend(&self) -> Backend {
        Backend::Gemini
    }

    #[instrument(skip(self, request), fields(request_id, model = %request.model))]
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", request_id.as_str());

        info!(
            request_id = %request_id,
            model = %request.model,
            has_image = request.image.is_some(),
            structured_output = request.output_schema.is_some(),
            "Starting Gemini generateContent request"
        );

        let gemini_request = GeminiRequest::from_request(request);
        let body = serde_json::to_string(&gemini_request)?;
        debug!(request_id = %request_id, "Gemini request: {}", body);

        // Gemini authenticates via a query-string key, not a Bearer header.
        // The keyed URL must stay out of log output.
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.api_base, request.model, request.credential
        );

        let response_body = self
            .http
            .execute_request(&request_id, body, |client, body| {
                client
                    .post(&url)
                    .header("Content-Type", "application/json")
                    .body(body)
            })
            .await?;

        let data: GeminiResponse = serde_json::from_str(&response_body)?;

        if let Some(ref usage) = data.usage_metadata {
            logging::log_usage(
                &request_id,
                "Gemini",
                usage.prompt_token_count,
                usage.candidates_token_count.unwrap_or(0),
                usage.total_token_count,
            );
        }

        // A response without text resolves to "" rather than an error;
        // only the chat-completions path fails on empty content.
        let content = extract_text(&data);

        logging::log_completion(
            &request_id,
            "Gemini",
            start_time.elapsed().as_millis() as u64,
            content.len(),
        );

        Ok(content)
    }
}

/// Join the text parts of the first candidate, or empty string if none.
fn extract_text(response: &GeminiResponse) -> String {
    response
        .candidates
        .as_ref()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| match part {
                    GeminiPart::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}
