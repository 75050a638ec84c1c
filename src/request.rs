// src/request.rs
// The immutable value object consumed by a single generate() call

use serde_json::Value;
use std::fmt;

/// Mime type assumed for an image when the caller does not specify one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// One generation request: constructed by the caller, consumed once.
///
/// A non-empty `endpoint_base` routes the request to the OpenAI-compatible
/// chat-completions path; otherwise the Gemini generateContent API is used.
#[derive(Clone)]
pub struct GenerationRequest {
    /// API key for the selected backend. Never logged; `Debug` redacts it.
    pub credential: String,
    /// Target model identifier.
    pub model: String,
    /// Base URL of an OpenAI-compatible endpoint. Presence selects the
    /// compatible path.
    pub endpoint_base: Option<String>,
    /// User prompt text.
    pub prompt: String,
    /// Optional system instruction (system message on the compatible path,
    /// systemInstruction on the Gemini path).
    pub system_instruction: Option<String>,
    /// Optional base64-encoded image bytes, without a data-URI prefix.
    pub image: Option<String>,
    /// Mime type of `image`; defaults to `image/png` when an image is set.
    pub mime_type: Option<String>,
    /// Optional output schema. Presence requests JSON-formatted output.
    pub output_schema: Option<Value>,
}

impl GenerationRequest {
    /// Create a request with the required fields.
    pub fn new(
        credential: impl Into<String>,
        model: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            credential: credential.into(),
            model: model.into(),
            endpoint_base: None,
            prompt: prompt.into(),
            system_instruction: None,
            image: None,
            mime_type: None,
            output_schema: None,
        }
    }

    /// Route to an OpenAI-compatible endpoint instead of Gemini.
    pub fn with_endpoint_base(mut self, endpoint_base: impl Into<String>) -> Self {
        self.endpoint_base = Some(endpoint_base.into());
        self
    }

    /// Set a system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Attach a base64-encoded image (no data-URI prefix).
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the mime type of the attached image.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Request JSON-formatted output conforming to `schema`.
    pub fn with_output_schema(mut self, schema: Value) -> Self {
        self.output_schema = Some(schema);
        self
    }

    /// Mime type to use for the attached image.
    pub(crate) fn image_mime(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(DEFAULT_IMAGE_MIME)
    }
}

// Manual Debug so a stray {:?} in caller logs cannot leak the credential,
// and so megabytes of base64 stay out of log output.
impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("credential", &"***")
            .field("model", &self.model)
            .field("endpoint_base", &self.endpoint_base)
            .field("prompt", &self.prompt)
            .field("system_instruction", &self.system_instruction)
            .field(
                "image",
                &self.image.as_ref().map(|i| format!("<{} base64 chars>", i.len())),
            )
            .field("mime_type", &self.mime_type)
            .field("output_schema", &self.output_schema)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_required_fields_only() {
        let req = GenerationRequest::new("sk-test", "test-model", "hello");
        assert_eq!(req.credential, "sk-test");
        assert_eq!(req.model, "test-model");
        assert_eq!(req.prompt, "hello");
        assert!(req.endpoint_base.is_none());
        assert!(req.system_instruction.is_none());
        assert!(req.image.is_none());
        assert!(req.mime_type.is_none());
        assert!(req.output_schema.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let req = GenerationRequest::new("k", "m", "p")
            .with_endpoint_base("https://x.test/v1")
            .with_system_instruction("be brief")
            .with_image("aGVsbG8=")
            .with_mime_type("image/jpeg")
            .with_output_schema(serde_json::json!({"type": "object"}));
        assert_eq!(req.endpoint_base.as_deref(), Some("https://x.test/v1"));
        assert_eq!(req.system_instruction.as_deref(), Some("be brief"));
        assert_eq!(req.image.as_deref(), Some("aGVsbG8="));
        assert_eq!(req.mime_type.as_deref(), Some("image/jpeg"));
        assert!(req.output_schema.is_some());
    }

    #[test]
    fn test_image_mime_defaults_to_png() {
        let req = GenerationRequest::new("k", "m", "p").with_image("aGVsbG8=");
        assert_eq!(req.image_mime(), "image/png");
    }

    #[test]
    fn test_image_mime_respects_explicit_value() {
        let req = GenerationRequest::new("k", "m", "p")
            .with_image("aGVsbG8=")
            .with_mime_type("image/webp");
        assert_eq!(req.image_mime(), "image/webp");
    }

    #[test]
    fn test_debug_redacts_credential() {
        let req = GenerationRequest::new("sk-very-secret", "m", "p").with_image("aGVsbG8=");
        let rendered = format!("{:?}", req);
        assert!(!rendered.contains("sk-very-secret"), "debug output leaked the credential");
        assert!(rendered.contains("***"));
        assert!(!rendered.contains("aGVsbG8="), "debug output leaked image bytes");
    }
}
