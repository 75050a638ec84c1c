// src/llm/mod.rs
// Backend clients (Gemini native, OpenAI-compatible endpoints)

pub mod gemini;
mod generator;
mod http_client;
pub(crate) mod logging;
pub mod openai_compat;
mod provider;

pub use gemini::GeminiClient;
pub use generator::ContentGenerator;
pub use http_client::LlmHttpClient;
pub use openai_compat::CompatClient;
pub use provider::{Backend, BackendClient};
