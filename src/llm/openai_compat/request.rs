// src/llm/openai_compat/request.rs
// Chat-completions request body construction

use crate::request::GenerationRequest;
use serde::Serialize;

/// Literal suffix appended to the user prompt when JSON output is requested.
pub(crate) const JSON_FORMAT_SUFFIX: &str = "\n\nPlease respond in valid JSON format.";

/// Chat completion request (OpenAI-compatible format)
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

/// Message content - a bare string or an array of content parts.
///
/// Kept as an explicit sum type so the JSON-mode suffix logic can match
/// exhaustively on both forms instead of probing shape at runtime.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// Content part for multimodal messages
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ChatRequest {
    /// Build the outbound body from a generation request.
    ///
    /// Messages are an optional leading system message followed by exactly
    /// one user message. With an image the user content is a parts sequence
    /// (text first, then a data-URI image reference); without one it stays a
    /// bare string.
    pub fn from_request(request: &GenerationRequest) -> Self {
        let mut messages = Vec::new();

        if let Some(ref system) = request.system_instruction {
            messages.push(ChatMessage {
                role: "system".into(),
                content: MessageContent::Text(system.clone()),
            });
        }

        let content = match request.image {
            Some(ref image) => MessageContent::Parts(vec![
                ContentPart::Text {
                    text: request.prompt.clone(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: format!("data:{};base64,{}", request.image_mime(), image),
                    },
                },
            ]),
            None => MessageContent::Text(request.prompt.clone()),
        };
        messages.push(ChatMessage {
            role: "user".into(),
            content,
        });

        let mut chat = Self {
            model: request.model.clone(),
            messages,
            stream: false,
            response_format: None,
        };

        if request.output_schema.is_some() {
            chat.response_format = Some(ResponseFormat {
                format_type: "json_object".into(),
            });
            chat.append_json_suffix();
        }

        chat
    }

    /// Append the JSON-mode suffix to the user message text.
    /// Parts sequences get it on their first text part; a sequence without
    /// any text part gains one holding just the suffix.
    fn append_json_suffix(&mut self) {
        let Some(user) = self.messages.iter_mut().rev().find(|m| m.role == "user") else {
            return;
        };
        match &mut user.content {
            MessageContent::Text(text) => text.push_str(JSON_FORMAT_SUFFIX),
            MessageContent::Parts(parts) => {
                for part in parts.iter_mut() {
                    if let ContentPart::Text { text } = part {
                        text.push_str(JSON_FORMAT_SUFFIX);
                        return;
                    }
                }
                parts.push(ContentPart::Text {
                    text: JSON_FORMAT_SUFFIX.to_string(),
                });
            }
        }
    }
}
