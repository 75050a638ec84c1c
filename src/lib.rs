// src/lib.rs
// unigen - one generate() call over Gemini and OpenAI-compatible chat endpoints

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod error;
pub mod http;
pub mod llm;
pub mod request;

pub use error::{GenerationError, Result};
pub use llm::{Backend, ContentGenerator};
pub use request::GenerationRequest;
