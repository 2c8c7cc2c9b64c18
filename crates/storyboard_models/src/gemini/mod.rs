//! Google Gemini REST API client.
//!
//! [`GeminiClient`] covers the two endpoints the storyboard generator needs:
//! - `generateContent` in JSON mode for scene structuring
//! - `predict` on an Imagen model for panel rendering

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    ApiErrorBody, ApiErrorDetail, Candidate, Content, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, OutputOptions, Part, PredictInstance,
    PredictParameters, PredictRequest, PredictResponse, Prediction, PromptFeedback,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, storyboard_error::GeminiError>;
