// src/llm/provider.rs
// Backend abstraction: the single branch point of the adapter

use crate::error::Result;
use crate::request::GenerationRequest;
use async_trait::async_trait;
use std::fmt;

/// The two execution paths a request can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Any endpoint speaking the OpenAI chat-completions JSON convention.
    Compat,
    /// The Gemini generateContent REST API.
    Gemini,
}

impl Backend {
    /// Select the path for a request. A present, non-empty `endpoint_base`
    /// routes to the compatible path; everything else goes to Gemini.
    /// This is the only branch point in the adapter.
    pub fn for_request(request: &GenerationRequest) -> Self {
        match request.endpoint_base.as_deref() {
            Some(base) if !base.is_empty() => Self::Compat,
            _ => Self::Gemini,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compat => write!(f, "compat"),
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

/// Trait implemented by both backend clients.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Perform one generation call and return the extracted text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Which path this client implements.
    fn backend(&self) -> Backend;
}
