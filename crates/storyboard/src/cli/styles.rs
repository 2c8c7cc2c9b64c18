//! Style preset listing.

use storyboard::ArtStyle;

/// Print the presets with the numbers `--preset` accepts.
pub fn list_styles() {
    for (index, style) in ArtStyle::presets().into_iter().enumerate() {
        let marker = if style == ArtStyle::default() { " (default)" } else { "" };
        println!("{}. {}{}", index + 1, style, marker);
    }
}
