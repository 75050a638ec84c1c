// src/llm/openai_compat/client.rs
// Compatible-endpoint client: one POST to {base}/chat/completions

use crate::error::Result;
use crate::llm::http_client::LlmHttpClient;
use crate::llm::logging;
use crate::llm::openai_compat::request::ChatRequest;
use crate::llm::openai_compat::response::extract_content;
use crate::llm::provider::{Backend, BackendClient};
use crate::request::GenerationRequest;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, error, info, instrument};
use uuid::Uuid;

/// Normalize an endpoint base into a chat-completions URL: trailing slashes
/// are stripped, and the `/chat/completions` suffix is appended unless the
/// base already ends with it.
pub fn chat_completions_url(endpoint_base: &str) -> String {
    let base = endpoint_base.trim_end_matches('/');
    if base.ends_with("/chat/completions") {
        base.to_string()
    } else {
        format!("{}/chat/completions", base)
    }
}

/// Client for OpenAI-compatible chat-completions endpoints.
/// Constructed per call around the shared HTTP client.
pub struct CompatClient<'a> {
    http: &'a LlmHttpClient,
}

impl<'a> CompatClient<'a> {
    pub fn new(http: &'a LlmHttpClient) -> Self {
        Self { http }
    }

    async fn generate_inner(&self, request_id: &str, request: &GenerationRequest) -> Result<String> {
        let url = chat_completions_url(request.endpoint_base.as_deref().unwrap_or_default());
        let chat = ChatRequest::from_request(request);
        let body = serde_json::to_string(&chat)?;
        debug!(request_id = %request_id, url = %url, "chat-completions request: {}", body);

        let response_body = self
            .http
            .execute(request_id, &url, &request.credential, body)
            .await?;

        let (content, usage) = extract_content(&response_body)?;
        if let Some(ref usage) = usage {
            logging::log_usage(
                request_id,
                "chat-completions",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens,
            );
        }
        Ok(content)
    }
}

#[async_trait]
impl BackendClient for CompatClient<'_> {
    fn backend(&self) -> Backend {
        Backend::Compat
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
            json_mode = request.output_schema.is_some(),
            "Starting chat-completions request"
        );

        match self.generate_inner(&request_id, request).await {
            Ok(content) => {
                logging::log_completion(
                    &request_id,
                    "chat-completions",
                    start_time.elapsed().as_millis() as u64,
                    content.len(),
                );
                Ok(content)
            }
            Err(e) => {
                // This path logs failures before surfacing them; the Gemini
                // path does not. Observed behavior, kept as-is.
                error!(request_id = %request_id, error = %e, "chat-completions generation failed");
                Err(e)
            }
        }
    }
}
