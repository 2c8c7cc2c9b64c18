//! Gemini-specific error types and rate-limit classification.

/// Marker the Generative Language API puts in the `status` field of quota errors.
pub const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

/// HTTP status code used by the API for throttled requests.
pub const TOO_MANY_REQUESTS: u16 = 429;

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY (or API_KEY) environment variable not set")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or the response could not be read
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message, including the API's error status when present
        message: String,
    },
    /// The API answered but the body carried no usable content
    #[display("Empty response from {}: {}", model, reason)]
    EmptyResponse {
        /// Model that produced the response
        model: String,
        /// What was missing
        reason: String,
    },
}

impl GeminiErrorKind {
    /// Check whether this error signals throttling by the API.
    ///
    /// A request counts as rate limited when the API answered with HTTP 429
    /// or reported a `RESOURCE_EXHAUSTED` status.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::GeminiErrorKind;
    ///
    /// let throttled = GeminiErrorKind::HttpError {
    ///     status_code: 429,
    ///     message: "Quota exceeded".to_string(),
    /// };
    /// assert!(throttled.is_rate_limited());
    ///
    /// let bad_request = GeminiErrorKind::HttpError {
    ///     status_code: 400,
    ///     message: "INVALID_ARGUMENT".to_string(),
    /// };
    /// assert!(!bad_request.is_rate_limited());
    /// ```
    pub fn is_rate_limited(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => *status_code == TOO_MANY_REQUESTS || message.contains(RESOURCE_EXHAUSTED),
            GeminiErrorKind::ApiRequest(message) => message.contains(RESOURCE_EXHAUSTED),
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
