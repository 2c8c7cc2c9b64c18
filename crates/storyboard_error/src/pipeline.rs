//! Run-level errors of the storyboard pipeline.

/// Conditions that terminate a storyboard run.
///
/// The display strings are written for end users; presentation code shows
/// them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The submitted script was blank
    #[display("Script cannot be empty.")]
    EmptyScript,
    /// The structuring model failed or returned malformed content
    #[display(
        "Failed to parse the script. The model couldn't structure the scenes ({}). Please check your script format.",
        _0
    )]
    ScriptParsing(String),
    /// Structuring succeeded but produced zero scenes
    #[display("No scenes were found in the script. Please ensure it's formatted correctly.")]
    NoScenesFound,
    /// A scene's image request failed for a reason other than throttling
    #[display("Failed to generate an image for Scene {}: {}", scene, message)]
    ImageGeneration {
        /// Scene number as emitted by the structuring model
        scene: u32,
        /// Underlying cause
        message: String,
    },
    /// Throttling persisted through every allowed attempt for a scene
    #[display(
        "Rate limit exceeded after {} attempts for Scene {}. Please try again later.",
        attempts,
        scene
    )]
    RateLimitExceeded {
        /// Scene number as emitted by the structuring model
        scene: u32,
        /// Attempts made, including the first
        attempts: u32,
    },
}

/// Pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::RateLimitExceeded { scene: 3, attempts: 5 });
/// assert!(err.to_string().contains("after 5 attempts for Scene 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
