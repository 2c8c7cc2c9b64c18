//! Script-to-storyboard generation pipeline.
//!
//! A run goes through three stages:
//! - [`ScriptParser`] asks a structuring model to split the script into scenes
//! - [`ImageSynthesizer`] renders one panel per scene, backing off on throttling
//! - [`StoryboardPipeline`] sequences the scenes, paces requests and emits
//!   frames through a callback or a stream
//!
//! [`StoryboardSession`] accumulates emitted frames for display.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parser;
mod pipeline;
mod prompts;
mod session;
mod synthesizer;

pub use parser::{ScriptParser, decode_scenes};
pub use pipeline::StoryboardPipeline;
pub use prompts::{image_prompt, scene_schema, structuring_prompt};
pub use session::{SessionState, StoryboardSession};
pub use synthesizer::{ImageSynthesizer, NO_IMAGE_DATA};
