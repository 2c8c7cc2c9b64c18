//! Core data types for the storyboard generator.
//!
//! Scene records, rendered frames, model request/response shapes and the
//! art style presets shared by every other crate in the workspace.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod frame;
mod image;
mod scene;
mod structured;
mod style;

pub use frame::StoryboardFrame;
pub use image::{
    DEFAULT_ASPECT_RATIO, DEFAULT_IMAGE_MIME_TYPE, ImageData, ImageRequest, ImageRequestBuilder,
    ImageRequestBuilderError, ImageResponse,
};
pub use scene::{ParsedScene, ParsedSceneBuilder, ParsedSceneBuilderError};
pub use structured::{
    JSON_MIME_TYPE, StructuredRequest, StructuredRequestBuilder, StructuredRequestBuilderError,
};
pub use style::{ArtStyle, SAMPLE_SCRIPT};
