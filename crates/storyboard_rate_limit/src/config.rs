//! Configuration for model endpoints, image output, retries and pacing.
//!
//! Configuration is loaded with a precedence system:
//! - Bundled defaults (include_str! from storyboard.toml)
//! - User override in the home directory
//! - User override in the current directory
//!
//! Every section and field is optional in override files; missing values fall
//! back to the built-in defaults.

use crate::BackoffPolicy;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storyboard_error::{ConfigError, StoryboardError, StoryboardResult};
use tracing::{debug, instrument};

/// Model endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Base URL of the Generative Language REST API
    pub api_base: String,
    /// Model that turns scripts into structured scenes
    pub structuring_model: String,
    /// Model that renders storyboard panels
    pub image_model: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            structuring_model: "gemini-2.5-flash".to_string(),
            image_model: "imagen-4.0-generate-001".to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl ModelsConfig {
    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Image output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Requested output MIME type
    pub mime_type: String,
    /// Requested aspect ratio
    pub aspect_ratio: String,
    /// Images requested per scene; only the first is used
    pub number_of_images: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            mime_type: "image/png".to_string(),
            aspect_ratio: "16:9".to_string(),
            number_of_images: 1,
        }
    }
}

/// Pacing between consecutive scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Wait after each scene except the last
    pub scene_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            scene_delay_ms: 15_000,
        }
    }
}

impl PacingConfig {
    /// Inter-scene delay as a [`Duration`].
    pub fn scene_delay(&self) -> Duration {
        Duration::from_millis(self.scene_delay_ms)
    }
}

/// Top-level storyboard configuration.
///
/// # Example
///
/// ```no_run
/// use storyboard_rate_limit::StoryboardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load()?;
/// println!("Scene delay: {:?}", config.pacing.scene_delay());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct StoryboardConfig {
    /// Model endpoints
    #[serde(default)]
    pub models: ModelsConfig,
    /// Image output
    #[serde(default)]
    pub image: ImageConfig,
    /// Backoff for throttled image requests
    #[serde(default)]
    pub retry: BackoffPolicy,
    /// Pacing between scenes
    #[serde(default)]
    pub pacing: PacingConfig,
}

impl StoryboardConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyboard").required(false));

        builder
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
