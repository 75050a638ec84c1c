// src/llm/openai_compat/response.rs
// Chat-completions response parsing

use crate::error::{GenerationError, Result};
use serde::Deserialize;

/// Non-streaming chat response (OpenAI-compatible format)
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ResponseChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Extract `choices[0].message.content` from a response body.
///
/// Absent or empty content is an error on this path; the Gemini path
/// resolves to an empty string instead.
pub fn extract_content(response_body: &str) -> Result<(String, Option<Usage>)> {
    let data: ChatResponse = serde_json::from_str(response_body)?;

    let content = data
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty());

    match content {
        Some(text) => Ok((text, data.usage)),
        None => Err(GenerationError::NoContent),
    }
}
