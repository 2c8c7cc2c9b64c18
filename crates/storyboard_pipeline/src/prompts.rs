//! Prompt templates for the structuring and image models.

use serde_json::{Value as JsonValue, json};
use storyboard_core::ParsedScene;

/// Instruction sent ahead of the script, with one worked example.
const STRUCTURING_INSTRUCTION: &str = r#"Parse the following film script into a JSON array of distinct scenes. Each object in the array should represent one scene. For each scene, provide a scene number, the setting, the characters present, and a concise description of the key action.

Example:
Script: "SCENE 1 INT. DINER - NIGHT. RACHEL sips coffee. LEO enters, looking nervous."
Output: [{ "scene": 1, "setting": "Diner at night", "characters": ["Rachel", "Leo"], "action": "Rachel sips coffee as a nervous Leo enters." }]

Now, parse this script:
---
"#;

/// Build the structuring prompt for a script.
///
/// # Examples
///
/// ```
/// use storyboard_pipeline::structuring_prompt;
///
/// let prompt = structuring_prompt("SCENE 1\nINT. OFFICE - DAY");
/// assert!(prompt.contains("JSON array of distinct scenes"));
/// assert!(prompt.ends_with("---\nSCENE 1\nINT. OFFICE - DAY"));
/// ```
pub fn structuring_prompt(script: &str) -> String {
    format!("{}{}", STRUCTURING_INSTRUCTION, script)
}

/// Response schema for the structuring model: an array of scene records.
pub fn scene_schema() -> JsonValue {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "scene": {"type": "INTEGER", "description": "Scene number"},
                "setting": {"type": "STRING", "description": "Description of the location and time."},
                "characters": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "List of characters in the scene."
                },
                "action": {"type": "STRING", "description": "A concise summary of the key action."}
            },
            "required": ["scene", "setting", "characters", "action"]
        }
    })
}

/// Build the rendering prompt for one scene in the given style.
///
/// # Examples
///
/// ```
/// use storyboard_core::ParsedScene;
/// use storyboard_pipeline::image_prompt;
///
/// let scene = ParsedScene::builder()
///     .scene(2u32)
///     .setting("Alleyway, night")
///     .action("A figure drops an object into a drain")
///     .build()
///     .unwrap();
///
/// let prompt = image_prompt(&scene, "Cyberpunk neon noir");
/// assert!(prompt.starts_with("Storyboard panel in a \"Cyberpunk neon noir\" style."));
/// assert!(prompt.contains("- Characters: None specified"));
/// ```
pub fn image_prompt(scene: &ParsedScene, style: &str) -> String {
    let mut characters = scene.characters().join(", ");
    if characters.is_empty() {
        characters = "None specified".to_string();
    }
    format!(
        "Storyboard panel in a \"{}\" style.\n\
         - Setting: {}\n\
         - Characters: {}\n\
         - Action: {}\n\
         Focus on clear composition, character poses, and mood. This is for a visual storyboard. Cinematic, detailed.",
        style,
        scene.setting(),
        characters,
        scene.action()
    )
}
