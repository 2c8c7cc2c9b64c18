//! Scene records produced by the structuring model.

use serde::{Deserialize, Serialize};

/// One scene of a script, as structured by the language model.
///
/// Scene numbers are whatever the model emitted: they are not guaranteed to be
/// contiguous or sorted.
///
/// # Examples
///
/// ```
/// use storyboard_core::ParsedScene;
///
/// let scene: ParsedScene = serde_json::from_str(
///     r#"{"scene": 1, "setting": "Diner at night", "characters": ["Rachel", "Leo"], "action": "Leo enters."}"#,
/// ).unwrap();
///
/// assert_eq!(*scene.scene(), 1);
/// assert_eq!(scene.characters().len(), 2);
/// assert_eq!(scene.caption(), "Setting: Diner at night. Action: Leo enters.");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ParsedScene {
    /// Scene number
    scene: u32,
    /// Location and time of day
    setting: String,
    /// Characters present, in the order the model listed them
    #[serde(default)]
    #[builder(default)]
    characters: Vec<String>,
    /// Concise summary of the key action
    action: String,
}

impl ParsedScene {
    /// Start building a scene.
    pub fn builder() -> ParsedSceneBuilder {
        ParsedSceneBuilder::default()
    }

    /// Caption shown under the rendered panel.
    pub fn caption(&self) -> String {
        format!("Setting: {}. Action: {}", self.setting, self.action)
    }
}
