//! REST client for scene structuring and panel rendering.

use super::GeminiResult;
use super::dto::{
    ApiErrorBody, GenerateContentRequest, GenerateContentResponse, PredictRequest, PredictResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use storyboard_core::{ImageRequest, ImageResponse, StructuredRequest};
use storyboard_error::{
    GeminiError, GeminiErrorKind, HttpError, JsonError, StoryboardError, StoryboardResult,
};
use storyboard_interface::{ImageModel, StructuringModel};
use storyboard_rate_limit::StoryboardConfig;
use tracing::{debug, instrument, warn};

/// Environment variables checked for the API key, in order.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Client for the Gemini text model and the Imagen image model.
///
/// One client serves both roles; wrap it in an `Arc` to hand it to the
/// parser and the synthesizer.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
    structuring_model: String,
    image_model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_base", &self.api_base)
            .field("structuring_model", &self.structuring_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with the key from `GEMINI_API_KEY` (or `API_KEY`).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when neither variable holds
    /// a non-empty value, or a client creation error.
    #[instrument(skip_all)]
    pub fn from_env(config: &StoryboardConfig) -> StoryboardResult<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                StoryboardError::from(GeminiError::new(GeminiErrorKind::MissingApiKey))
            })?;
        Self::new(api_key, config)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(
        structuring_model = %config.models.structuring_model,
        image_model = %config.models.image_model,
    ))]
    pub fn new(api_key: impl Into<String>, config: &StoryboardConfig) -> StoryboardResult<Self> {
        let client = Client::builder()
            .timeout(config.models.request_timeout())
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(api_base = %config.models.api_base, "Created Gemini client");

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_base: config.models.api_base.trim_end_matches('/').to_string(),
            structuring_model: config.models.structuring_model.clone(),
            image_model: config.models.image_model.clone(),
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.api_base, model, method)
    }

    /// POST a JSON body and decode a JSON response.
    ///
    /// Non-2xx responses become [`GeminiErrorKind::HttpError`] with the API's
    /// canonical status kept in the message.
    async fn post_json<B, R>(&self, url: &str, body: &B) -> StoryboardResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let err = http_error(status.as_u16(), &error_text);
            warn!(status = status.as_u16(), error = %err.kind, "Gemini API returned an error");
            return Err(err.into());
        }

        let text = response.text().await.map_err(|e| {
            StoryboardError::from(HttpError::new(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;
        debug!(bytes = text.len(), "Received Gemini API response");

        serde_json::from_str(&text).map_err(|e| {
            StoryboardError::from(JsonError::new(format!(
                "Failed to decode response from {}: {}",
                url, e
            )))
        })
    }
}

/// Build the error for a non-2xx response.
fn http_error(status_code: u16, body: &str) -> GeminiError {
    let mut message = ApiErrorBody::describe(body);
    if message.is_empty() {
        message = format!("HTTP status {}", status_code);
    }
    GeminiError::new(GeminiErrorKind::HttpError {
        status_code,
        message,
    })
}

fn empty_response(model: &str, reason: impl Into<String>) -> GeminiError {
    GeminiError::new(GeminiErrorKind::EmptyResponse {
        model: model.to_string(),
        reason: reason.into(),
    })
}

/// Extract the JSON text of a structuring response.
fn structured_text(model: &str, response: &GenerateContentResponse) -> GeminiResult<String> {
    response
        .text()
        .ok_or_else(|| empty_response(model, response.empty_reason()))
}

#[async_trait]
impl StructuringModel for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.structuring_model, prompt_len = req.prompt().len()))]
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        let url = self.endpoint(&self.structuring_model, "generateContent");
        let body = GenerateContentRequest::from(req);

        debug!("Sending structured generation request");
        let response: GenerateContentResponse = self.post_json(&url, &body).await?;

        Ok(structured_text(&self.structuring_model, &response)?)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.structuring_model
    }
}

#[async_trait]
impl ImageModel for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.image_model, aspect_ratio = %req.aspect_ratio()))]
    async fn generate_images(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse> {
        let url = self.endpoint(&self.image_model, "predict");
        let body = PredictRequest::from(req);

        debug!("Sending image generation request");
        let response: PredictResponse = self.post_json(&url, &body).await?;

        let filtered = response
            .predictions()
            .iter()
            .filter(|p| p.rai_filtered_reason().is_some())
            .count();
        if filtered > 0 {
            warn!(filtered, "Image model filtered some predictions");
        }

        Ok(response.into_image_response(req.output_mime_type()))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.image_model
    }
}
