//! Storyboard generation command handler.

use super::GenerateArgs;
use futures_util::StreamExt;
use std::sync::Arc;
use storyboard::{
    FrameWriter, GeminiClient, ScriptSource, StoryboardConfig, StoryboardPipeline,
    StoryboardResult, StoryboardSession, resolve_style,
};
use tracing::{info, instrument};

/// Run the pipeline and stream frames to stdout as JSON lines.
///
/// Frames are written as soon as they arrive; the first error ends the run.
#[instrument(skip_all)]
pub async fn generate_storyboard(args: GenerateArgs) -> StoryboardResult<()> {
    let config = match &args.config {
        Some(path) => StoryboardConfig::from_file(path)?,
        None => StoryboardConfig::load()?,
    };

    let script = ScriptSource::from_args(args.file, args.text).load()?;
    let style = resolve_style(args.style, args.preset)?;

    let mut session = StoryboardSession::new();
    session.begin(&script)?;

    let client = Arc::new(GeminiClient::from_env(&config)?);
    let pipeline = StoryboardPipeline::with_config(client.clone(), client, &config);

    info!(style = %style, "Generating storyboard");

    let mut writer = FrameWriter::new(std::io::stdout());
    let mut frames = std::pin::pin!(pipeline.stream(script, style));
    let mut outcome = Ok(());

    while let Some(item) = frames.next().await {
        match item {
            Ok(frame) => {
                if let Err(e) = writer.write_frame(&frame) {
                    outcome = Err(e);
                    break;
                }
                session.push_frame(frame);
            }
            Err(e) => {
                outcome = Err(e);
                break;
            }
        }
    }

    session.finish(&outcome);
    outcome?;

    info!(frames = session.frames().len(), "Storyboard complete");
    Ok(())
}
