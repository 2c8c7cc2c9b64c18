//! Rendered storyboard frames.

use crate::{ImageData, ParsedScene};
use serde::{Deserialize, Serialize};

/// A finished storyboard panel: caption plus embeddable image.
///
/// Serializes with the field names the display surface expects
/// (`scene`, `description`, `imageUrl`).
///
/// # Examples
///
/// ```
/// use storyboard_core::{ImageData, ParsedScene, StoryboardFrame};
///
/// let scene = ParsedScene::builder()
///     .scene(2u32)
///     .setting("Alleyway, night")
///     .action("A figure drops an object into a drain")
///     .build()
///     .unwrap();
/// let image = ImageData::new("image/png", "iVBORw0KGgo=");
///
/// let frame = StoryboardFrame::from_scene(&scene, &image);
/// assert_eq!(*frame.scene(), 2);
/// assert_eq!(
///     frame.description(),
///     "Setting: Alleyway, night. Action: A figure drops an object into a drain"
/// );
/// assert_eq!(frame.image_url(), "data:image/png;base64,iVBORw0KGgo=");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardFrame {
    /// Scene number, mirroring [`ParsedScene::scene`]
    scene: u32,
    /// `Setting: {setting}. Action: {action}`
    description: String,
    /// Self-contained `data:` URI of the rendered image
    image_url: String,
}

impl StoryboardFrame {
    /// Assemble the frame for a scene from its rendered image.
    pub fn from_scene(scene: &ParsedScene, image: &ImageData) -> Self {
        Self {
            scene: *scene.scene(),
            description: scene.caption(),
            image_url: image.to_data_uri(),
        }
    }
}
