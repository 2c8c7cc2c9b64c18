//! Trait definitions for model backends.

use async_trait::async_trait;
use storyboard_core::{ImageRequest, ImageResponse, StructuredRequest};
use storyboard_error::StoryboardResult;

/// A text model that can answer in schema-constrained JSON.
///
/// Used by the scene parser to turn a script into scene records.
#[async_trait]
pub trait StructuringModel: Send + Sync {
    /// Generate text for a JSON-mode request.
    ///
    /// Returns the raw response text; decoding is left to the caller.
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// A model that renders images from a text prompt.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Generate the images described by the request.
    ///
    /// Throttling must surface as an error the rate limit detector recognises
    /// (HTTP 429 or `RESOURCE_EXHAUSTED`), since the caller owns retries.
    async fn generate_images(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "imagen-4.0-generate-001").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: StructuringModel + ?Sized> StructuringModel for std::sync::Arc<T> {
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        (**self).generate_structured(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: ImageModel + ?Sized> ImageModel for std::sync::Arc<T> {
    async fn generate_images(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse> {
        (**self).generate_images(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
