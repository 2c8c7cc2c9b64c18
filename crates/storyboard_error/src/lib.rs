//! Error types for the storyboard generator.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! [`StoryboardError`] boxes any of them and is the error type returned by
//! every public operation in the workspace.
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{StoryboardResult, HttpError};
//!
//! fn fetch_data() -> StoryboardResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! assert!(fetch_data().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod http;
mod io;
mod json;
mod pipeline;

pub use config::ConfigError;
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use gemini::{GeminiError, GeminiErrorKind, RESOURCE_EXHAUSTED, TOO_MANY_REQUESTS};
pub use http::HttpError;
pub use io::IoError;
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
