// src/llm/gemini/types.rs
// Gemini generateContent wire types (camelCase on the wire)

use crate::request::GenerationRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeminiPart {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
    Text {
        text: String,
    },
    /// Part shapes we never send but may receive (functionCall, thought
    /// summaries without text). Must stay the last variant so the tagged
    /// forms above win during deserialization.
    Other(Value),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiInlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// Structured-output configuration. Only attached when the caller supplied
/// an output schema; schema enforcement on this path is structural, not a
/// prompt suffix.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Option<Vec<GeminiCandidate>>,
    #[serde(default)]
    pub usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsage {
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    pub total_token_count: u32,
}

impl GeminiRequest {
    /// Build the outbound body from a generation request.
    pub fn from_request(request: &GenerationRequest) -> Self {
        let mut parts = Vec::new();

        // Inline data precedes the text part here; the chat-completions
        // path sends text first. Observed ordering, kept as-is.
        if let Some(ref image) = request.image {
            parts.push(GeminiPart::InlineData {
                inline_data: GeminiInlineData {
                    mime_type: request.image_mime().to_string(),
                    data: image.clone(),
                },
            });
        }
        parts.push(GeminiPart::Text {
            text: request.prompt.clone(),
        });

        let system_instruction = request.system_instruction.as_ref().map(|text| GeminiContent {
            parts: vec![GeminiPart::Text { text: text.clone() }],
        });

        let generation_config = request.output_schema.as_ref().map(|schema| GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: Some(schema.clone()),
        });

        Self {
            contents: vec![GeminiContent { parts }],
            system_instruction,
            generation_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_request() -> GenerationRequest {
        GenerationRequest::new("gm-test", "gemini-pro", "describe this")
    }

    // ============================================================================
    // Request construction
    // ============================================================================

    #[test]
    fn test_text_only_request() {
        let req = GeminiRequest::from_request(&base_request());
        assert_eq!(req.contents.len(), 1);
        assert_eq!(req.contents[0].parts.len(), 1);
        assert!(
            matches!(&req.contents[0].parts[0], GeminiPart::Text { text } if text == "describe this")
        );
        assert!(req.system_instruction.is_none());
        assert!(req.generation_config.is_none());
    }

    #[test]
    fn test_inline_data_precedes_text() {
        let req = GeminiRequest::from_request(&base_request().with_image("aGVsbG8="));
        let parts = &req.contents[0].parts;
        assert_eq!(parts.len(), 2);
        match &parts[0] {
            GeminiPart::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/png");
                assert_eq!(inline_data.data, "aGVsbG8=");
            }
            other => panic!("expected inline data first, got {:?}", other),
        }
        assert!(matches!(&parts[1], GeminiPart::Text { .. }));
    }

    #[test]
    fn test_explicit_mime_type_used() {
        let req = GeminiRequest::from_request(
            &base_request().with_image("aGVsbG8=").with_mime_type("image/webp"),
        );
        match &req.contents[0].parts[0] {
            GeminiPart::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/webp");
            }
            other => panic!("expected inline data, got {:?}", other),
        }
    }

    #[test]
    fn test_system_instruction_mapped() {
        let req =
            GeminiRequest::from_request(&base_request().with_system_instruction("be brief"));
        let instruction = req.system_instruction.unwrap();
        assert!(matches!(&instruction.parts[0], GeminiPart::Text { text } if text == "be brief"));
    }

    #[test]
    fn test_output_schema_sets_generation_config() {
        let schema = json!({"type": "object", "properties": {"name": {"type": "string"}}});
        let req = GeminiRequest::from_request(&base_request().with_output_schema(schema.clone()));
        let config = req.generation_config.unwrap();
        assert_eq!(config.response_mime_type, "application/json");
        assert_eq!(config.response_schema, Some(schema));
    }

    #[test]
    fn test_no_prompt_suffix_on_this_path() {
        let req = GeminiRequest::from_request(
            &base_request().with_output_schema(json!({"type": "object"})),
        );
        match &req.contents[0].parts[0] {
            GeminiPart::Text { text } => assert_eq!(text, "describe this"),
            other => panic!("expected text part, got {:?}", other),
        }
    }

    // ============================================================================
    // Wire format
    // ============================================================================

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let req = GeminiRequest::from_request(
            &base_request()
                .with_image("aGVsbG8=")
                .with_system_instruction("be brief")
                .with_output_schema(json!({"type": "object"})),
        );
        let body: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert!(body["systemInstruction"].is_object());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["text"], "describe this");
    }

    // ============================================================================
    // Response deserialization
    // ============================================================================

    #[test]
    fn test_response_roundtrip() {
        let json = r#"{
            "candidates": [{"content": {"role": "model", "parts": [{"text": "hi"}]}}],
            "usageMetadata": {"promptTokenCount": 4, "candidatesTokenCount": 2, "totalTokenCount": 6}
        }"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        let usage = response.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, 4);
        assert_eq!(usage.candidates_token_count, Some(2));
        assert_eq!(usage.total_token_count, 6);
        let candidates = response.candidates.unwrap();
        assert!(candidates[0].content.is_some());
    }

    #[test]
    fn test_response_with_unknown_part_shapes_deserializes() {
        let json = r#"{
            "candidates": [{"content": {"role": "model", "parts": [
                {"functionCall": {"name": "search", "args": {"q": "x"}}},
                {"text": "done"}
            ]}}]
        }"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        let candidates = response.candidates.unwrap();
        let parts = &candidates[0].content.as_ref().unwrap().parts;
        assert!(matches!(&parts[0], GeminiPart::Other(_)));
        assert!(matches!(&parts[1], GeminiPart::Text { text } if text == "done"));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_none());
        assert!(response.usage_metadata.is_none());
    }
}
