//! Classification of errors that signal API throttling.
//!
//! The image model reports quota exhaustion either as HTTP 429 or with a
//! `RESOURCE_EXHAUSTED` status in the error body. Only those errors are worth
//! retrying; everything else fails the scene immediately.

use storyboard_error::{RESOURCE_EXHAUSTED, StoryboardError, StoryboardErrorKind};

/// Check whether an error signals throttling by the API.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GeminiError, GeminiErrorKind, HttpError, StoryboardError};
/// use storyboard_rate_limit::is_rate_limited;
///
/// let throttled: StoryboardError = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 429,
///     message: "Too many requests".to_string(),
/// })
/// .into();
/// assert!(is_rate_limited(&throttled));
///
/// let refused: StoryboardError = HttpError::new("Connection refused").into();
/// assert!(!is_rate_limited(&refused));
/// ```
pub fn is_rate_limited(error: &StoryboardError) -> bool {
    match error.kind() {
        StoryboardErrorKind::Gemini(err) => err.kind.is_rate_limited(),
        StoryboardErrorKind::Http(err) => err.message.contains(RESOURCE_EXHAUSTED),
        _ => false,
    }
}
