//! Test utilities for pipeline tests.
//!
//! Mock model implementations and helpers for building structuring output.

#![allow(dead_code)]

pub mod mock_models;

pub use mock_models::{MockImageModel, MockImageResponse, MockStructuringModel};

use storyboard_error::GeminiErrorKind;

/// One scene record as the structuring model would emit it.
pub fn scene_value(scene: u32, setting: &str, characters: &[&str], action: &str) -> serde_json::Value {
    serde_json::json!({
        "scene": scene,
        "setting": setting,
        "characters": characters,
        "action": action,
    })
}

/// Structuring output for the given scene records.
pub fn scenes_json(scenes: Vec<serde_json::Value>) -> String {
    serde_json::Value::Array(scenes).to_string()
}

/// A throttling error as the API reports it.
pub fn rate_limited() -> GeminiErrorKind {
    GeminiErrorKind::HttpError {
        status_code: 429,
        message: "RESOURCE_EXHAUSTED: Quota exceeded".to_string(),
    }
}

/// A non-throttling API error.
pub fn bad_request() -> GeminiErrorKind {
    GeminiErrorKind::HttpError {
        status_code: 400,
        message: "INVALID_ARGUMENT: Image generation failed".to_string(),
    }
}
