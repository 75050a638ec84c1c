// src/llm/http_client.rs
// Shared HTTP plumbing for both backend paths

use crate::error::{GenerationError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Default request timeout when wrapping an existing client
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
/// Default connect timeout when wrapping an existing client
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Thin wrapper over reqwest shared by both backend clients.
///
/// Issues exactly one POST per call: no retry, no backoff. Non-success
/// statuses are normalized into `GenerationError::Api` carrying the status
/// code and the raw body text.
pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl LlmHttpClient {
    /// Wrap an existing reqwest::Client. The single constructor: client
    /// configuration (timeouts, pooling) belongs to `http::create_shared_client`
    /// or the caller.
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Execute one HTTP POST using Bearer auth.
    /// Returns the response body as text on success.
    pub async fn execute(
        &self,
        request_id: &str,
        url: &str,
        api_key: &str,
        body: String,
    ) -> Result<String> {
        self.execute_request(request_id, body, |client, body| {
            client
                .post(url)
                .header("Authorization", format!("Bearer {}", api_key))
                .header("Content-Type", "application/json")
                .body(body)
        })
        .await
    }

    /// Execute one HTTP POST using a custom request builder.
    ///
    /// The `build_request` closure receives the reqwest Client and the
    /// request body, allowing callers to customize URL, headers, and auth
    /// (Gemini authenticates via a query-string key rather than a header).
    pub async fn execute_request<F>(
        &self,
        request_id: &str,
        body: String,
        build_request: F,
    ) -> Result<String>
    where
        F: FnOnce(&Client, String) -> reqwest::RequestBuilder,
    {
        // Transport errors are stripped of their URL before surfacing:
        // the Gemini URL carries the API key in its query string, and the
        // error Display would otherwise hand it to caller logs.
        let response = build_request(&self.client, body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(
                request_id = %request_id,
                status = %status,
                "API returned non-success status"
            );
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body: error_body,
            });
        }

        Ok(response.text().await.map_err(reqwest::Error::without_url)?)
    }
}
