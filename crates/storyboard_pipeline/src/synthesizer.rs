//! Per-scene image synthesis with backoff on throttling.

use crate::image_prompt;
use storyboard_core::{ImageData, ImageRequest, ParsedScene};
use storyboard_error::{PipelineError, PipelineErrorKind, StoryboardError, StoryboardResult};
use storyboard_interface::ImageModel;
use storyboard_rate_limit::{BackoffPolicy, ImageConfig, RetryFailure, StoryboardConfig};
use tracing::{debug, info, instrument, warn};

/// Message used when the image model answers without any image bytes.
pub const NO_IMAGE_DATA: &str = "No image data was returned by the API";

/// Renders one image per scene through an image model.
///
/// Throttled requests (HTTP 429 or `RESOURCE_EXHAUSTED`) are retried with
/// exponential backoff up to the policy's attempt budget; any other failure
/// ends the scene immediately. Retry state is local to each call.
#[derive(Debug, Clone)]
pub struct ImageSynthesizer<M> {
    model: M,
    policy: BackoffPolicy,
    image: ImageConfig,
}

impl<M: ImageModel> ImageSynthesizer<M> {
    /// Create a synthesizer with the default backoff policy and image options.
    pub fn new(model: M) -> Self {
        Self {
            model,
            policy: BackoffPolicy::default(),
            image: ImageConfig::default(),
        }
    }

    /// Create a synthesizer using the `[retry]` and `[image]` configuration.
    pub fn with_config(model: M, config: &StoryboardConfig) -> Self {
        Self {
            model,
            policy: config.retry,
            image: config.image.clone(),
        }
    }

    /// Replace the backoff policy.
    pub fn with_policy(mut self, policy: BackoffPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The backoff policy in use.
    pub fn policy(&self) -> &BackoffPolicy {
        &self.policy
    }

    /// Render a scene in the given style.
    ///
    /// Returns the first generated image. Its MIME type is the one the model
    /// declared, falling back to the requested output type.
    ///
    /// # Errors
    ///
    /// - [`PipelineErrorKind::RateLimitExceeded`] when every attempt was throttled
    /// - [`PipelineErrorKind::ImageGeneration`] for any other failure, including
    ///   a response without image data
    #[instrument(skip(self, scene), fields(scene = *scene.scene(), model = self.model.model_name()))]
    pub async fn synthesize(&self, scene: &ParsedScene, style: &str) -> StoryboardResult<ImageData> {
        let scene_number = *scene.scene();

        let request = ImageRequest::builder()
            .prompt(image_prompt(scene, style))
            .number_of_images(self.image.number_of_images)
            .output_mime_type(self.image.mime_type.clone())
            .aspect_ratio(self.image.aspect_ratio.clone())
            .build()
            .map_err(|e| generation_error(scene_number, e.to_string()))?;

        let outcome = self
            .policy
            .execute(|attempt| {
                debug!(attempt, "Requesting image");
                self.model.generate_images(&request)
            })
            .await;

        let response = match outcome {
            Ok(response) => response,
            Err(RetryFailure::Exhausted { attempts, error }) => {
                warn!(attempts, error = %error, "Max retries reached");
                return Err(PipelineError::new(PipelineErrorKind::RateLimitExceeded {
                    scene: scene_number,
                    attempts,
                })
                .into());
            }
            Err(RetryFailure::Permanent { attempts, error }) => {
                warn!(attempts, error = %error, "Image request failed");
                return Err(generation_error(scene_number, error.user_message()));
            }
        };

        let image = response
            .first()
            .cloned()
            .ok_or_else(|| generation_error(scene_number, NO_IMAGE_DATA))?;

        info!(mime_type = %image.mime_type(), "Generated image");
        Ok(image)
    }
}

#[track_caller]
fn generation_error(scene: u32, message: impl Into<String>) -> StoryboardError {
    PipelineError::new(PipelineErrorKind::ImageGeneration {
        scene,
        message: message.into(),
    })
    .into()
}
