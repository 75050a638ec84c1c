// src/llm/gemini/mod.rs
// Native path: Gemini generateContent REST API

mod client;
pub mod types;

pub use client::GeminiClient;
