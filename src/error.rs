// src/error.rs
// Standardized error type for generation failures

use thiserror::Error;

/// Single error type surfaced by `generate`.
///
/// Every failure source on either backend path (transport, non-2xx status,
/// malformed response JSON, missing content) is normalized into this one
/// kind at the path boundary. Nothing is retried; the caller decides.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Non-success HTTP status, carrying the status code and the raw
    /// response body text.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Connection, timeout, or other transport-level failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The compatible endpoint answered 2xx but `choices[0].message.content`
    /// was absent or empty. The Gemini path never produces this: it resolves
    /// to an empty string instead.
    #[error("No content in response")]
    NoContent,
}

/// Convenience type alias for Result using GenerationError
pub type Result<T> = std::result::Result<T, GenerationError>;
