//! Run orchestration: structure once, then render scenes one at a time.

use crate::{ImageSynthesizer, ScriptParser};
use futures_util::Stream;
use std::time::Duration;
use storyboard_core::StoryboardFrame;
use storyboard_error::{PipelineError, PipelineErrorKind, StoryboardResult};
use storyboard_interface::{ImageModel, StructuringModel};
use storyboard_rate_limit::{PacingConfig, StoryboardConfig};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, info, instrument, warn};

/// Drives a storyboard run from script text to emitted frames.
///
/// Scenes are processed strictly sequentially in the order the structuring
/// model returned them. After each successful scene except the last, the
/// pipeline waits the configured pacing delay to stay under per-minute quotas.
/// The first failing scene aborts the run.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use storyboard_models::GeminiClient;
/// use storyboard_pipeline::StoryboardPipeline;
/// use storyboard_rate_limit::StoryboardConfig;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load()?;
/// let client = Arc::new(GeminiClient::from_env(&config)?);
/// let pipeline = StoryboardPipeline::with_config(client.clone(), client, &config);
///
/// pipeline
///     .run("SCENE 1\nINT. DINER - NIGHT", "Cyberpunk neon noir", |frame| {
///         println!("Scene {}: {}", frame.scene(), frame.description());
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StoryboardPipeline<S, I> {
    parser: ScriptParser<S>,
    synthesizer: ImageSynthesizer<I>,
    pacing: PacingConfig,
}

impl<S, I> StoryboardPipeline<S, I>
where
    S: StructuringModel,
    I: ImageModel,
{
    /// Create a pipeline with default retry, image and pacing settings.
    pub fn new(structuring: S, image: I) -> Self {
        Self {
            parser: ScriptParser::new(structuring),
            synthesizer: ImageSynthesizer::new(image),
            pacing: PacingConfig::default(),
        }
    }

    /// Create a pipeline from loaded configuration.
    pub fn with_config(structuring: S, image: I, config: &StoryboardConfig) -> Self {
        Self {
            parser: ScriptParser::new(structuring),
            synthesizer: ImageSynthesizer::with_config(image, config),
            pacing: config.pacing,
        }
    }

    /// Replace the pacing settings.
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// The scene parser.
    pub fn parser(&self) -> &ScriptParser<S> {
        &self.parser
    }

    /// The image synthesizer.
    pub fn synthesizer(&self) -> &ImageSynthesizer<I> {
        &self.synthesizer
    }

    /// Delay between consecutive scenes.
    pub fn scene_delay(&self) -> Duration {
        self.pacing.scene_delay()
    }

    /// Run the pipeline, handing each frame to `on_frame` as soon as it is ready.
    ///
    /// `on_frame` is called synchronously, once per scene, in the order the
    /// structuring model returned the scenes. Frames delivered before a failure
    /// stay valid; the run never resumes after one.
    ///
    /// # Errors
    ///
    /// - [`PipelineErrorKind::ScriptParsing`] if the script could not be structured
    /// - [`PipelineErrorKind::NoScenesFound`] if structuring yielded no scenes
    /// - [`PipelineErrorKind::ImageGeneration`] or
    ///   [`PipelineErrorKind::RateLimitExceeded`] from the first failing scene
    #[instrument(skip(self, script, on_frame), fields(script_len = script.len()))]
    pub async fn run<F>(&self, script: &str, style: &str, mut on_frame: F) -> StoryboardResult<()>
    where
        F: FnMut(StoryboardFrame) + Send,
    {
        let scenes = self.parser.parse_script(script).await?;

        if scenes.is_empty() {
            warn!("Structuring returned no scenes");
            return Err(PipelineError::new(PipelineErrorKind::NoScenesFound).into());
        }

        let total = scenes.len();
        let delay = self.pacing.scene_delay();

        for (index, scene) in scenes.iter().enumerate() {
            let image = self
                .synthesizer
                .synthesize(scene, style)
                .await
                .inspect_err(|e| {
                    warn!(scene = *scene.scene(), error = %e, "Stopping generation");
                })?;

            let frame = StoryboardFrame::from_scene(scene, &image);
            info!(scene = *frame.scene(), position = index + 1, total, "Frame ready");
            on_frame(frame);

            if index + 1 < total {
                info!(
                    delay_ms = delay.as_millis() as u64,
                    "Waiting before the next scene to respect rate limits"
                );
                tokio::time::sleep(delay).await;
            }
        }

        info!(frames = total, "Storyboard complete");
        Ok(())
    }
}

impl<S, I> StoryboardPipeline<S, I>
where
    S: StructuringModel + Clone + 'static,
    I: ImageModel + Clone + 'static,
{
    /// Run the pipeline on a spawned task and receive frames as a stream.
    ///
    /// The stream yields frames in emission order, then at most one error,
    /// then ends. Dropping the stream stops the run at its next suspension
    /// point.
    ///
    /// Must be called within a Tokio runtime.
    pub fn stream(
        &self,
        script: impl Into<String>,
        style: impl Into<String>,
    ) -> impl Stream<Item = StoryboardResult<StoryboardFrame>> + Send + 'static {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let pipeline = self.clone();
        let script = script.into();
        let style = style.into();

        tokio::spawn(async move {
            let frames = tx.clone();
            let run = pipeline.run(&script, &style, move |frame| {
                // A closed channel means the consumer is gone; the select below
                // ends the run.
                let _ = frames.send(Ok(frame));
            });

            tokio::select! {
                result = run => {
                    if let Err(e) = result {
                        let _ = tx.send(Err(e));
                    }
                }
                _ = tx.closed() => {
                    debug!("Frame stream dropped, stopping run");
                }
            }
        });

        UnboundedReceiverStream::new(rx)
    }
}
