//! Structured (JSON mode) text generation requests.

use serde_json::Value as JsonValue;

/// MIME type that switches the text model into JSON mode.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Request for text constrained to a JSON schema.
///
/// # Examples
///
/// ```
/// use storyboard_core::StructuredRequest;
/// use serde_json::json;
///
/// let request = StructuredRequest::builder()
///     .prompt("List three colors")
///     .response_schema(json!({"type": "ARRAY", "items": {"type": "STRING"}}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.response_mime_type(), "application/json");
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct StructuredRequest {
    /// Instruction and input text sent as the user turn
    prompt: String,
    /// Response MIME type
    #[builder(default = "JSON_MIME_TYPE.to_string()")]
    response_mime_type: String,
    /// Schema the response must satisfy, in the API's OpenAPI subset
    response_schema: JsonValue,
}

impl StructuredRequest {
    /// Start building a structured request.
    pub fn builder() -> StructuredRequestBuilder {
        StructuredRequestBuilder::default()
    }
}
