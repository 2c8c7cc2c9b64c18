//! Model provider integrations for the storyboard generator.
//!
//! # Example
//!
//! ```no_run
//! use storyboard_core::ImageRequest;
//! use storyboard_interface::ImageModel;
//! use storyboard_models::GeminiClient;
//! use storyboard_rate_limit::StoryboardConfig;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env(&StoryboardConfig::load()?)?;
//! let request = ImageRequest::builder()
//!     .prompt("Storyboard panel of a rainy alley at night")
//!     .build()?;
//! let response = client.generate_images(&request).await?;
//! println!("{} image(s)", response.images().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    ApiErrorBody, ApiErrorDetail, Candidate, Content, GeminiClient, GeminiResult,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, OutputOptions, Part,
    PredictInstance, PredictParameters, PredictRequest, PredictResponse, Prediction,
    PromptFeedback,
};
