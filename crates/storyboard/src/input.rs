//! Script and style selection for front ends.

use std::path::PathBuf;
use storyboard_core::{ArtStyle, SAMPLE_SCRIPT};
use storyboard_error::{ConfigError, IoError, StoryboardError, StoryboardResult};
use tracing::debug;

/// Where the script text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// Read from a file
    File(PathBuf),
    /// Given inline
    Text(String),
    /// The bundled two-scene sample
    Sample,
}

impl ScriptSource {
    /// Pick a source from optional file and inline arguments.
    ///
    /// A file wins over inline text; with neither, the sample script is used.
    pub fn from_args(file: Option<PathBuf>, text: Option<String>) -> Self {
        match (file, text) {
            (Some(path), _) => ScriptSource::File(path),
            (None, Some(text)) => ScriptSource::Text(text),
            (None, None) => ScriptSource::Sample,
        }
    }

    /// Read the script text.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load(&self) -> StoryboardResult<String> {
        match self {
            ScriptSource::File(path) => {
                debug!(path = %path.display(), "Reading script from file");
                std::fs::read_to_string(path).map_err(|e| {
                    StoryboardError::from(IoError::new(format!(
                        "Failed to read script from {}: {}",
                        path.display(),
                        e
                    )))
                })
            }
            ScriptSource::Text(text) => Ok(text.clone()),
            ScriptSource::Sample => Ok(SAMPLE_SCRIPT.to_string()),
        }
    }
}

/// Resolve the style label from free text or a 1-based preset number.
///
/// Free text wins over a preset; with neither, the default preset is used.
///
/// # Examples
///
/// ```
/// use storyboard::resolve_style;
///
/// assert_eq!(resolve_style(None, None).unwrap(), "Cinematic black and white sketch");
/// assert_eq!(resolve_style(None, Some(4)).unwrap(), "Gritty comic book style, dark shadows");
/// assert_eq!(resolve_style(Some("Ukiyo-e woodblock".into()), Some(4)).unwrap(), "Ukiyo-e woodblock");
/// assert!(resolve_style(None, Some(0)).is_err());
/// ```
pub fn resolve_style(style: Option<String>, preset: Option<usize>) -> StoryboardResult<String> {
    if let Some(style) = style.filter(|s| !s.trim().is_empty()) {
        return Ok(style);
    }
    let Some(number) = preset else {
        return Ok(ArtStyle::default().to_string());
    };

    let presets = ArtStyle::presets();
    number
        .checked_sub(1)
        .and_then(|index| presets.get(index))
        .map(|style| style.to_string())
        .ok_or_else(|| {
            StoryboardError::from(ConfigError::new(format!(
                "Unknown style preset {} (expected 1 to {})",
                number,
                presets.len()
            )))
        })
}
