// src/llm/generator.rs
// ContentGenerator: selects a backend per call and delegates

use crate::error::Result;
use crate::http::create_shared_client;
use crate::llm::gemini::GeminiClient;
use crate::llm::http_client::LlmHttpClient;
use crate::llm::openai_compat::CompatClient;
use crate::llm::provider::{Backend, BackendClient};
use crate::request::GenerationRequest;
use tracing::info;

/// Stateless entry point: one `generate` call, one outbound request.
///
/// Holds only the shared HTTP client; backend clients are constructed
/// per call from the request itself, so no per-backend state survives
/// between invocations.
pub struct ContentGenerator {
    http: LlmHttpClient,
}

impl ContentGenerator {
    /// Create a generator with the default pooled HTTP client.
    pub fn new() -> Self {
        Self::with_http_client(create_shared_client())
    }

    /// Create a generator around a caller-owned reqwest::Client
    /// (custom timeouts, proxies, shared pools).
    pub fn with_http_client(client: reqwest::Client) -> Self {
        Self {
            http: LlmHttpClient::from_client(client),
        }
    }

    /// Generate text for a request.
    ///
    /// Routes to the OpenAI-compatible path when `endpoint_base` is present
    /// and non-empty, otherwise to the Gemini path, and returns the text
    /// extracted from the backend response.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let backend = Backend::for_request(request);
        info!(backend = %backend, model = %request.model, "Dispatching generation request");

        let client: Box<dyn BackendClient + '_> = match backend {
            Backend::Compat => Box::new(CompatClient::new(&self.http)),
            Backend::Gemini => Box::new(GeminiClient::new(&self.http)),
        };

        client.generate(request).await
    }
}

impl Default for ContentGenerator {
    fn default() -> Self {
        Self::new()
    }
}
