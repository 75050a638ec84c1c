// src/llm/openai_compat/mod.rs
// Compatible-endpoint path: any backend speaking the chat-completions convention

mod client;
mod request;
mod response;

pub use client::{CompatClient, chat_completions_url};
pub use request::{ChatMessage, ChatRequest, ContentPart, ImageUrl, MessageContent, ResponseFormat};
pub use response::{ChatResponse, ResponseChoice, ResponseMessage, Usage, extract_content};
