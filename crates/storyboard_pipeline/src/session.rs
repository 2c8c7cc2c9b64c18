//! Headless model of the presentation state for one storyboard.

use crate::StoryboardPipeline;
use derive_getters::Getters;
use storyboard_core::StoryboardFrame;
use storyboard_error::{PipelineError, PipelineErrorKind, StoryboardError, StoryboardResult};
use storyboard_interface::{ImageModel, StructuringModel};
use tracing::{debug, instrument};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A run is in progress
    Generating,
    /// The last submission failed with this user-facing message
    Failed(String),
    /// The last run delivered every frame
    Complete,
}

/// Accumulates frames for display while a run is in progress.
///
/// Frames arrive in emission order but are kept sorted by scene number for
/// display; frames with equal numbers keep their arrival order.
///
/// # Examples
///
/// ```
/// use storyboard_pipeline::{SessionState, StoryboardSession};
///
/// let mut session = StoryboardSession::new();
/// assert!(session.begin("   ").is_err());
/// assert_eq!(
///     session.state(),
///     &SessionState::Failed("Script cannot be empty.".to_string())
/// );
///
/// session.begin("SCENE 1\nINT. DINER - NIGHT").unwrap();
/// assert!(session.is_generating());
/// ```
#[derive(Debug, Clone, Default, Getters)]
pub struct StoryboardSession {
    /// Current lifecycle state
    state: SessionState,
    /// Frames received so far, sorted by scene number
    frames: Vec<StoryboardFrame>,
}

impl StoryboardSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run is in progress.
    pub fn is_generating(&self) -> bool {
        self.state == SessionState::Generating
    }

    /// The failure message of the last submission, if it failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start a new submission.
    ///
    /// A blank script is rejected and the frames of the previous run are left
    /// untouched. Otherwise frames and error are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineErrorKind::EmptyScript`] for a blank script.
    pub fn begin(&mut self, script: &str) -> StoryboardResult<()> {
        if script.trim().is_empty() {
            let err = StoryboardError::from(PipelineError::new(PipelineErrorKind::EmptyScript));
            self.state = SessionState::Failed(err.user_message());
            return Err(err);
        }
        self.frames.clear();
        self.state = SessionState::Generating;
        Ok(())
    }

    /// Add a frame, keeping frames sorted by scene number.
    pub fn push_frame(&mut self, frame: StoryboardFrame) {
        let index = self
            .frames
            .partition_point(|existing| existing.scene() <= frame.scene());
        debug!(scene = *frame.scene(), index, "Adding frame to session");
        self.frames.insert(index, frame);
    }

    /// Record the outcome of a run. Frames already received are kept.
    pub fn finish(&mut self, result: &StoryboardResult<()>) {
        self.state = match result {
            Ok(()) => SessionState::Complete,
            Err(e) => SessionState::Failed(e.user_message()),
        };
    }

    /// Submit a script: begin, run the pipeline into this session, finish.
    ///
    /// Starting a run discards the frames of the previous one.
    #[instrument(skip_all)]
    pub async fn generate<S, I>(
        &mut self,
        pipeline: &StoryboardPipeline<S, I>,
        script: &str,
        style: &str,
    ) -> StoryboardResult<()>
    where
        S: StructuringModel,
        I: ImageModel,
    {
        self.begin(script)?;
        let result = pipeline
            .run(script, style, |frame| self.push_frame(frame))
            .await;
        self.finish(&result);
        result
    }
}
