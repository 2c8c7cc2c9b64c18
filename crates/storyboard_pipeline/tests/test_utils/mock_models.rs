//! Mock structuring and image models.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyboard_core::{ImageData, ImageRequest, ImageResponse, StructuredRequest};
use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardError, StoryboardResult};
use storyboard_interface::{ImageModel, StructuringModel};
use tokio::time::Instant;

/// Mock structuring model returning a fixed response.
pub struct MockStructuringModel {
    response: Result<String, GeminiErrorKind>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockStructuringModel {
    /// Always answer with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fail with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self {
            response: Err(error),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl StructuringModel for MockStructuringModel {
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        self.prompts.lock().unwrap().push(req.prompt().clone());
        self.response
            .clone()
            .map_err(|kind| StoryboardError::from(GeminiError::new(kind)))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-structuring"
    }
}

/// A single scripted image response.
#[derive(Debug, Clone)]
pub enum MockImageResponse {
    /// One generated image
    Image(ImageData),
    /// A successful response without images
    Empty,
    /// An API error
    Error(GeminiErrorKind),
}

impl MockImageResponse {
    /// A PNG image with a short fake payload.
    pub fn png() -> Self {
        MockImageResponse::Image(ImageData::new("image/png", "iVBORw0KGgo="))
    }
}

/// Mock image model replaying a scripted sequence of responses.
///
/// Once the sequence is exhausted the fallback response repeats.
pub struct MockImageModel {
    sequence: Vec<MockImageResponse>,
    fallback: MockImageResponse,
    requests: Arc<Mutex<Vec<(Instant, ImageRequest)>>>,
}

impl MockImageModel {
    /// Always answer with a PNG image.
    pub fn new_success() -> Self {
        Self::new_sequence(Vec::new(), MockImageResponse::png())
    }

    /// Always answer with the given response.
    pub fn new_always(response: MockImageResponse) -> Self {
        Self::new_sequence(Vec::new(), response)
    }

    /// Replay `sequence`, then repeat `fallback`.
    pub fn new_sequence(sequence: Vec<MockImageResponse>, fallback: MockImageResponse) -> Self {
        Self {
            sequence,
            fallback,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Prompts received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, req)| req.prompt().clone())
            .collect()
    }

    /// Requests received, in order.
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, req)| req.clone())
            .collect()
    }

    /// When each request arrived.
    pub fn call_times(&self) -> Vec<Instant> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(at, _)| *at)
            .collect()
    }
}

#[async_trait]
impl ImageModel for MockImageModel {
    async fn generate_images(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push((Instant::now(), req.clone()));
            requests.len() - 1
        };

        let response = self.sequence.get(index).unwrap_or(&self.fallback);
        match response {
            MockImageResponse::Image(image) => Ok(ImageResponse::new(vec![image.clone()])),
            MockImageResponse::Empty => Ok(ImageResponse::default()),
            MockImageResponse::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }
}
