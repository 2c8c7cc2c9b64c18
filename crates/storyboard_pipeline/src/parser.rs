//! Script structuring into scene records.

use crate::{scene_schema, structuring_prompt};
use serde_json::Value as JsonValue;
use storyboard_core::{ParsedScene, StructuredRequest};
use storyboard_error::{PipelineError, PipelineErrorKind, StoryboardError, StoryboardResult};
use storyboard_interface::StructuringModel;
use tracing::{debug, info, instrument, warn};

/// Turns a raw script into ordered scene records via a structuring model.
///
/// The script is sent as-is; the model does all segmentation. There is no
/// retry at this layer.
#[derive(Debug, Clone)]
pub struct ScriptParser<M> {
    model: M,
}

impl<M: StructuringModel> ScriptParser<M> {
    /// Create a parser backed by the given model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Structure a script into scenes, in the order the model returned them.
    ///
    /// An empty array is a valid result.
    ///
    /// # Errors
    ///
    /// Every failure, whether the request itself or a malformed response,
    /// becomes [`PipelineErrorKind::ScriptParsing`].
    #[instrument(skip(self, script), fields(script_len = script.len(), model = self.model.model_name()))]
    pub async fn parse_script(&self, script: &str) -> StoryboardResult<Vec<ParsedScene>> {
        let request = StructuredRequest::builder()
            .prompt(structuring_prompt(script))
            .response_schema(scene_schema())
            .build()
            .map_err(|e| parsing_error(e.to_string()))?;

        let text = self
            .model
            .generate_structured(&request)
            .await
            .map_err(|e| {
                warn!(error = %e, "Structuring request failed");
                parsing_error(e.user_message())
            })?;

        let scenes = decode_scenes(&text)?;
        info!(scene_count = scenes.len(), "Parsed script into scenes");
        Ok(scenes)
    }
}

/// Decode the structuring model's response text into scene records.
///
/// # Examples
///
/// ```
/// use storyboard_pipeline::decode_scenes;
///
/// let scenes = decode_scenes(
///     r#"  [{"scene": 4, "setting": "Pier", "characters": [], "action": "Fog rolls in."}]  "#,
/// )
/// .unwrap();
/// assert_eq!(*scenes[0].scene(), 4);
///
/// assert!(decode_scenes(r#"{"scene": 1}"#).is_err());
/// ```
pub fn decode_scenes(text: &str) -> StoryboardResult<Vec<ParsedScene>> {
    let trimmed = text.trim();
    debug!(bytes = trimmed.len(), "Decoding structuring response");

    let value: JsonValue = serde_json::from_str(trimmed)
        .map_err(|e| parsing_error(format!("response was not valid JSON: {}", e)))?;

    if !value.is_array() {
        return Err(parsing_error("response was not a JSON array of scenes"));
    }

    serde_json::from_value(value)
        .map_err(|e| parsing_error(format!("a scene did not match the expected shape: {}", e)))
}

#[track_caller]
fn parsing_error(cause: impl Into<String>) -> StoryboardError {
    PipelineError::new(PipelineErrorKind::ScriptParsing(cause.into())).into()
}
