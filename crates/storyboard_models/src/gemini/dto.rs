//! Wire types for the Generative Language REST API.
//!
//! Only the fields the storyboard generator sends or reads are modelled;
//! unknown response fields are ignored.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use storyboard_core::{ImageData, ImageRequest, ImageResponse, StructuredRequest};

/// A text part of a content turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
pub struct Content {
    /// Author role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Parts of the turn
    #[serde(default)]
    parts: Vec<Part>,
}

/// JSON-mode generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Response MIME type
    response_mime_type: String,
    /// Response schema
    response_schema: JsonValue,
}

/// Body of `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn here
    contents: Vec<Content>,
    /// Generation settings
    generation_config: GenerationConfig,
}

impl From<&StructuredRequest> for GenerateContentRequest {
    fn from(req: &StructuredRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(req.prompt().clone()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: req.response_mime_type().clone(),
                response_schema: req.response_schema().clone(),
            },
        }
    }
}

/// A response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    content: Option<Content>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Feedback about the prompt itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt was blocked
    #[serde(default)]
    block_reason: Option<String>,
}

/// Response of `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, best first
    #[serde(default)]
    candidates: Vec<Candidate>,
    /// Prompt feedback
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }

    /// Human-readable reason for a response without text.
    pub fn empty_reason(&self) -> String {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            return format!("prompt blocked ({})", reason);
        }
        match self
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
        {
            Some(reason) => format!("no text returned (finish reason {})", reason),
            None => "no candidates returned".to_string(),
        }
    }
}

/// One Imagen prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct PredictInstance {
    /// Rendering prompt
    prompt: String,
}

/// Imagen output encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Output MIME type
    mime_type: String,
}

/// Imagen generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Images to generate
    sample_count: u32,
    /// Aspect ratio, e.g. `16:9`
    aspect_ratio: String,
    /// Output encoding
    output_options: OutputOptions,
}

/// Body of `models/{model}:predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct PredictRequest {
    /// Prompts; a single instance here
    instances: Vec<PredictInstance>,
    /// Generation parameters
    parameters: PredictParameters,
}

impl From<&ImageRequest> for PredictRequest {
    fn from(req: &ImageRequest) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: req.prompt().clone(),
            }],
            parameters: PredictParameters {
                sample_count: *req.number_of_images(),
                aspect_ratio: req.aspect_ratio().clone(),
                output_options: OutputOptions {
                    mime_type: req.output_mime_type().clone(),
                },
            },
        }
    }
}

/// One Imagen prediction.
///
/// Filtered predictions carry `raiFilteredReason` and no image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64 image bytes
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    /// MIME type of the bytes
    #[serde(default)]
    mime_type: Option<String>,
    /// Safety filter reason
    #[serde(default)]
    rai_filtered_reason: Option<String>,
}

/// Response of `models/{model}:predict`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default, Getters)]
pub struct PredictResponse {
    /// Predictions in generation order
    #[serde(default)]
    predictions: Vec<Prediction>,
}

impl PredictResponse {
    /// Keep predictions that carry image bytes.
    ///
    /// `fallback_mime_type` is used when a prediction omits its MIME type.
    pub fn into_image_response(self, fallback_mime_type: &str) -> ImageResponse {
        let images = self
            .predictions
            .into_iter()
            .filter_map(|prediction| {
                let bytes = prediction.bytes_base64_encoded.filter(|b| !b.is_empty())?;
                let mime_type = prediction
                    .mime_type
                    .unwrap_or_else(|| fallback_mime_type.to_string());
                Some(ImageData::new(mime_type, bytes))
            })
            .collect();
        ImageResponse::new(images)
    }
}

/// Error detail in a non-2xx response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ApiErrorDetail {
    /// HTTP status code echoed by the API
    #[serde(default)]
    code: Option<u16>,
    /// Error message
    #[serde(default)]
    message: String,
    /// Canonical status, e.g. `RESOURCE_EXHAUSTED`
    #[serde(default)]
    status: Option<String>,
}

/// Non-2xx response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ApiErrorBody {
    /// Error detail
    error: ApiErrorDetail,
}

impl ApiErrorBody {
    /// Render the error as `STATUS: message`, preserving the canonical status.
    ///
    /// Falls back to the raw body when it is not the API's error envelope.
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => match parsed.error.status {
                Some(status) => format!("{}: {}", status, parsed.error.message),
                None => parsed.error.message,
            },
            Err(_) => body.trim().to_string(),
        }
    }
}
