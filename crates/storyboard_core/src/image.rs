//! Image generation request and response types.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Output format requested for storyboard panels.
pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/png";

/// Widescreen aspect ratio used for every panel.
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

/// Base64-encoded image bytes with their declared MIME type.
///
/// # Examples
///
/// ```
/// use storyboard_core::ImageData;
///
/// let image = ImageData::from_bytes("image/png", &[0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(image.base64(), "iVBORw==");
/// assert_eq!(image.to_data_uri(), "data:image/png;base64,iVBORw==");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageData {
    /// MIME type declared by the image model
    mime_type: String,
    /// Standard base64 encoding of the image bytes
    base64: String,
}

impl ImageData {
    /// Wrap an already-encoded payload.
    pub fn new(mime_type: impl Into<String>, base64: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            base64: base64.into(),
        }
    }

    /// Encode raw image bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Render as a directly embeddable `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Request for one or more rendered images.
///
/// # Examples
///
/// ```
/// use storyboard_core::ImageRequest;
///
/// let request = ImageRequest::builder()
///     .prompt("Storyboard panel of a rainy alley")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.number_of_images(), 1);
/// assert_eq!(request.output_mime_type(), "image/png");
/// assert_eq!(request.aspect_ratio(), "16:9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Natural-language rendering prompt
    prompt: String,
    /// Number of images to generate
    #[builder(default = "1")]
    number_of_images: u32,
    /// Output MIME type
    #[builder(default = "DEFAULT_IMAGE_MIME_TYPE.to_string()")]
    output_mime_type: String,
    /// Aspect ratio, e.g. `16:9`
    #[builder(default = "DEFAULT_ASPECT_RATIO.to_string()")]
    aspect_ratio: String,
}

impl ImageRequest {
    /// Start building an image request.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// Images returned by the image model, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_getters::Getters)]
pub struct ImageResponse {
    /// Generated images; may be empty when the model filtered its output
    images: Vec<ImageData>,
}

impl ImageResponse {
    /// Create a response from generated images.
    pub fn new(images: Vec<ImageData>) -> Self {
        Self { images }
    }

    /// The first generated image, if any.
    pub fn first(&self) -> Option<&ImageData> {
        self.images.first()
    }
}
