//! Line-delimited JSON output of frames.

use std::io::Write;
use storyboard_core::StoryboardFrame;
use storyboard_error::{IoError, JsonError, StoryboardError, StoryboardResult};

/// Writes each frame as one JSON object per line and flushes immediately.
///
/// # Examples
///
/// ```
/// use storyboard::{FrameWriter, ImageData, ParsedScene, StoryboardFrame};
///
/// let scene = ParsedScene::builder()
///     .scene(1u32)
///     .setting("Diner")
///     .action("Coffee")
///     .build()
///     .unwrap();
/// let frame = StoryboardFrame::from_scene(&scene, &ImageData::new("image/png", "AAAA"));
///
/// let mut writer = FrameWriter::new(Vec::new());
/// writer.write_frame(&frame).unwrap();
///
/// let line = String::from_utf8(writer.into_inner()).unwrap();
/// assert!(line.ends_with("\n"));
/// assert!(line.contains(r#""imageUrl":"data:image/png;base64,AAAA""#));
/// ```
#[derive(Debug)]
pub struct FrameWriter<W> {
    inner: W,
    written: usize,
}

impl<W: Write> FrameWriter<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Write one frame as a JSON line.
    ///
    /// # Errors
    ///
    /// Fails if the frame cannot be serialized or the writer fails.
    pub fn write_frame(&mut self, frame: &StoryboardFrame) -> StoryboardResult<()> {
        serde_json::to_writer(&mut self.inner, frame)
            .map_err(|e| StoryboardError::from(JsonError::new(e.to_string())))?;
        writeln!(self.inner)
            .and_then(|()| self.inner.flush())
            .map_err(|e| {
                StoryboardError::from(IoError::new(format!("Failed to write frame: {}", e)))
            })?;
        self.written += 1;
        Ok(())
    }

    /// Frames written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Recover the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
