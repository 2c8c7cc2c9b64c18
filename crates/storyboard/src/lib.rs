//! Storyboard - turn film scripts into illustrated storyboards.
//!
//! A script is split into scenes by a structuring model, then each scene is
//! rendered as one panel by an image model. Panels are delivered as they
//! complete, paced to stay within per-minute quotas.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use storyboard::{ArtStyle, GeminiClient, SAMPLE_SCRIPT, StoryboardConfig, StoryboardPipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoryboardConfig::load()?;
//! let client = Arc::new(GeminiClient::from_env(&config)?);
//! let pipeline = StoryboardPipeline::with_config(client.clone(), client, &config);
//!
//! pipeline
//!     .run(SAMPLE_SCRIPT, ArtStyle::GrittyComic.label(), |frame| {
//!         println!("Scene {}: {}", frame.scene(), frame.description());
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The workspace is organized as focused crates:
//!
//! - `storyboard_error` - Error types
//! - `storyboard_core` - Scenes, frames, requests and art styles
//! - `storyboard_interface` - Model traits
//! - `storyboard_rate_limit` - Configuration, throttling detection and backoff
//! - `storyboard_models` - Gemini and Imagen client
//! - `storyboard_pipeline` - Parser, synthesizer, orchestrator and session
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use storyboard_core::*;
pub use storyboard_error::*;
pub use storyboard_interface::*;
pub use storyboard_models::*;
pub use storyboard_pipeline::*;
pub use storyboard_rate_limit::*;

mod input;
pub mod observability;
mod output;

pub use input::{ScriptSource, resolve_style};
pub use output::FrameWriter;
