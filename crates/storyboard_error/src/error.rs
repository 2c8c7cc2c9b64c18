//! Top-level error wrapper types.

use crate::{
    ConfigError, GeminiError, HttpError, IoError, JsonError, PipelineError, PipelineErrorKind,
};

/// Every error family produced across the workspace.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StoryboardError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Local I/O error
    #[from(IoError)]
    Io(IoError),
    /// Gemini model error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Run-level pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{PipelineError, PipelineErrorKind, StoryboardResult};
///
/// fn might_fail() -> StoryboardResult<()> {
///     Err(PipelineError::new(PipelineErrorKind::NoScenesFound))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert_eq!(err.pipeline_kind(), Some(&PipelineErrorKind::NoScenesFound));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }

    /// The run-level condition, when this error terminated a pipeline run.
    pub fn pipeline_kind(&self) -> Option<&PipelineErrorKind> {
        match self.kind() {
            StoryboardErrorKind::Pipeline(err) => Some(&err.kind),
            _ => None,
        }
    }

    /// Message suitable for end users.
    ///
    /// Renders the underlying condition without the wrapper prefixes and
    /// source location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardError};
    ///
    /// let err = StoryboardError::from(GeminiError::new(GeminiErrorKind::HttpError {
    ///     status_code: 400,
    ///     message: "INVALID_ARGUMENT: bad prompt".to_string(),
    /// }));
    /// assert_eq!(err.user_message(), "HTTP 400 error: INVALID_ARGUMENT: bad prompt");
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            StoryboardErrorKind::Http(err) => err.message.clone(),
            StoryboardErrorKind::Json(err) => err.message.clone(),
            StoryboardErrorKind::Config(err) => err.message.clone(),
            StoryboardErrorKind::Io(err) => err.message.clone(),
            StoryboardErrorKind::Gemini(err) => err.kind.to_string(),
            StoryboardErrorKind::Pipeline(err) => err.kind.to_string(),
        }
    }
}

impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyboard operations.
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
