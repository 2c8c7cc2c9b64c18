//! Configuration, throttling detection and backoff for the storyboard generator.
//!
//! The image model enforces per-minute quotas. This crate provides:
//! - [`StoryboardConfig`]: layered TOML configuration for models, image
//!   output, retries and pacing
//! - [`is_rate_limited`]: classifies which errors are worth retrying
//! - [`BackoffPolicy`]: exponential backoff with jitter, executed with
//!   `tokio-retry2`
//!
//! # Example
//!
//! ```
//! use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardError};
//! use storyboard_rate_limit::BackoffPolicy;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let policy = BackoffPolicy::default();
//! let outcome = policy
//!     .execute(|attempt| async move {
//!         if attempt < 3 {
//!             Err(StoryboardError::from(GeminiError::new(
//!                 GeminiErrorKind::HttpError {
//!                     status_code: 429,
//!                     message: "RESOURCE_EXHAUSTED".to_string(),
//!                 },
//!             )))
//!         } else {
//!             Ok(attempt)
//!         }
//!     })
//!     .await;
//! assert_eq!(outcome.unwrap(), 3);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backoff;
mod config;
mod detector;

pub use backoff::{BackoffPolicy, RetryFailure};
pub use config::{ImageConfig, ModelsConfig, PacingConfig, StoryboardConfig};
pub use detector::is_rate_limited;
